use super::SlotStore;
use crate::error::{Result, VarmanError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed slots: each key lives in `{root}/{key}.json`.
pub struct FileSlots {
    root: PathBuf,
}

impl FileSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(VarmanError::Io)?;
        }
        Ok(())
    }
}

impl SlotStore for FileSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(VarmanError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write: a crash mid-write leaves the old slot intact
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(VarmanError::Io)?;
        fs::rename(&tmp_file, self.slot_path(key)).map_err(VarmanError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(VarmanError::Io)?;
        }
        Ok(())
    }
}
