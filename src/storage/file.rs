use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::TokenStore;

/// Store file name in the storage directory
const STORE_FILE: &str = "session.json";

/// JSON-file store: a single object of string entries on disk.
///
/// The file is created on first write and deleted again once the last
/// entry is removed, so a signed-out state leaves nothing behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store under the user cache directory, namespaced by application name.
    pub fn default_location(app_name: &str) -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(Self::new(cache_dir.join(app_name)))
    }

    fn store_path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        let path = self.store_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read store file")?;
            serde_json::from_str(&contents).context("Failed to parse store file")
        } else {
            Ok(HashMap::new())
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        let path = self.store_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        if entries.is_empty() {
            let path = self.store_path();
            if path.exists() {
                std::fs::remove_file(path)?;
            }
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TOKEN_KEY;

    #[test]
    fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        // A second store over the same directory sees the same entry
        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_remove_deletes_empty_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set(TOKEN_KEY, "abc").unwrap();
        assert!(store.store_path().exists());

        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert!(!store.store_path().exists());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.remove(TOKEN_KEY).unwrap();
        assert!(!store.store_path().exists());

        store.set("other", "kept").unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
    }
}
