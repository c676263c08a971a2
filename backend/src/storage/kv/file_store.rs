//! File-backed key-value store: one `<key>.json` file per key in the data
//! directory, written atomically through a temp file and rename.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::storage::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        // Write to a temp file first so a crash never leaves a half-written value
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get("cycleData").unwrap(), None);

        store.set("cycleData", r#"{"cycleLength":28}"#).unwrap();
        assert_eq!(
            store.get("cycleData").unwrap().as_deref(),
            Some(r#"{"cycleLength":28}"#)
        );
        assert!(temp_dir.path().join("cycleData.json").exists());
        assert!(!temp_dir.path().join("cycleData.json.tmp").exists());

        store.set("cycleData", "{}").unwrap();
        assert_eq!(store.get("cycleData").unwrap().as_deref(), Some("{}"));

        store.remove("cycleData").unwrap();
        assert_eq!(store.get("cycleData").unwrap(), None);
        store.remove("cycleData").unwrap();
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.base_directory(), nested.as_path());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        FileStore::new(temp_dir.path())
            .unwrap()
            .set("userPlan", "premium")
            .unwrap();

        let reopened = FileStore::new(temp_dir.path()).unwrap();
        assert_eq!(reopened.get("userPlan").unwrap().as_deref(), Some("premium"));
    }
}
