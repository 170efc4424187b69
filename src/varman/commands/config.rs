//! Reading and changing settings of the active scope's `config.json`.
//!
//! An unreadable file reads as the defaults, as it does when the API starts
//! up. Bad keys and values are reported as error messages, not failures.

use crate::commands::{CmdMessage, CmdResult, VarmanPaths};
use crate::config::VarmanConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &VarmanPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = VarmanConfig::load_or_default(&dir);

    let result = match action {
        ConfigAction::ShowAll => CmdResult::default().with_config(config),
        ConfigAction::ShowKey(key) => CmdResult::default().with_message(match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => unknown_key(&key),
        }),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Err(e) => CmdResult::default().with_message(CmdMessage::error(e.to_string())),
            Ok(()) => {
                config.save(&dir)?;
                let shown = config.get(&key).unwrap_or(value);
                CmdResult::default()
                    .with_message(CmdMessage::success(format!("{} set to {}", key, shown)))
                    .with_config(config)
            }
        },
    };
    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        VarmanConfig::KEYS.join(", ")
    ))
}
