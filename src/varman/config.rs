use crate::board::DEFAULT_LABEL;
use crate::catalog::{Catalog, DEFAULT_CATALOG_SIZE, DEFAULT_IMAGE_URL, MAX_CATALOG_SIZE};
use crate::error::{Result, VarmanError};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for varman, stored in .varman/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VarmanConfig {
    /// Slot key the board is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Number of images offered by the picker
    #[serde(default = "default_catalog_size")]
    pub catalog_size: u32,

    /// Image url template; `{n}` is replaced by the image number
    #[serde(default = "default_image_url")]
    pub image_url: String,

    /// Label for filters added without one
    #[serde(default = "default_label")]
    pub default_label: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_catalog_size() -> u32 {
    DEFAULT_CATALOG_SIZE
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for VarmanConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            catalog_size: default_catalog_size(),
            image_url: default_image_url(),
            default_label: default_label(),
        }
    }
}

impl VarmanConfig {
    pub const KEYS: [&'static str; 4] =
        ["storage-key", "catalog-size", "image-url", "default-label"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VarmanError::Io)?;
        let config: VarmanConfig =
            serde_json::from_str(&content).map_err(VarmanError::Serialization)?;
        Ok(config)
    }

    /// Like [`VarmanConfig::load`], but an unreadable file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "config unreadable, using defaults");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VarmanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VarmanError::Serialization)?;
        fs::write(config_path, content).map_err(VarmanError::Io)?;
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::generated(self.catalog_size, &self.image_url)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "catalog-size" => Some(self.catalog_size.to_string()),
            "image-url" => Some(self.image_url.clone()),
            "default-label" => Some(self.default_label.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-key" => {
                if value.is_empty()
                    || !value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    return Err(VarmanError::Config(format!(
                        "storage-key may only use letters, digits, '-' or '_': {:?}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "catalog-size" => {
                let size = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (1..=MAX_CATALOG_SIZE).contains(n));
                self.catalog_size = size.ok_or_else(|| {
                    VarmanError::Config(format!(
                        "catalog-size must be a number from 1 to {}: {}",
                        MAX_CATALOG_SIZE, value
                    ))
                })?;
            }
            "image-url" => {
                if !value.contains("{n}") {
                    return Err(VarmanError::Config(
                        "image-url must contain the {n} placeholder".to_string(),
                    ));
                }
                self.image_url = value.to_string();
            }
            "default-label" => {
                if value.is_empty() {
                    return Err(VarmanError::Config(
                        "default-label cannot be empty".to_string(),
                    ));
                }
                self.default_label = value.to_string();
            }
            _ => return Err(VarmanError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
