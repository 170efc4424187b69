use crate::api::{VarmanApi, VarmanPaths};
use crate::config::VarmanConfig;
use crate::error::{Result, VarmanError};
use crate::model::Scope;
use crate::store::fs::FileSlots;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-project data directory.
pub const PROJECT_DIR: &str = ".varman";

/// Overrides the global data directory.
pub const HOME_ENV: &str = "VARMAN_HOME";

pub struct VarmanContext {
    pub api: VarmanApi<FileSlots>,
    pub scope: Scope,
}

/// Walks up from `cwd` looking for an existing `.varman` directory.
/// Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "varman", "varman")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| VarmanError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<VarmanContext> {
    let project_dir = find_project_root(cwd)
        .map(|root| root.join(PROJECT_DIR))
        .unwrap_or_else(|| cwd.join(PROJECT_DIR));
    let global_dir = global_data_dir()?;

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let data_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = VarmanConfig::load_or_default(data_dir);
    debug!(dir = %data_dir.display(), ?scope, "using data directory");

    let slots = FileSlots::new(data_dir.clone());
    let paths = VarmanPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let api = VarmanApi::new(slots, config, paths);

    Ok(VarmanContext { api, scope })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_varman_dir_in_cwd() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(PROJECT_DIR)).unwrap();
        assert_eq!(find_project_root(temp.path()), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn finds_varman_dir_in_parent() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("a").join("b");
        fs::create_dir_all(&child).unwrap();
        fs::create_dir(temp.path().join(PROJECT_DIR)).unwrap();
        assert_eq!(find_project_root(&child), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn project_scope_defaults_to_cwd() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path(), false).unwrap();
        assert_eq!(ctx.scope, Scope::Project);
        let project = ctx.api.paths().project.clone().unwrap();
        assert!(project.ends_with(PROJECT_DIR));
    }
}
