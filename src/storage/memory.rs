use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use super::TokenStore;

/// In-process store backed by a mutex-guarded map.
///
/// Useful when the embedding application keeps the credential for the
/// lifetime of the process only, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("Failed to acquire store lock");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("Failed to acquire store lock");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("Failed to acquire store lock");
        entries.remove(key);
        Ok(())
    }
}
