//! Durable client-side key/value storage
//!
//! The browser host implements [`PreferenceStore`] over `localStorage`;
//! [`MemoryStore`] backs tests and hosts without durable storage.

use std::collections::HashMap;

use crate::error::Result;

/// String key/value storage that survives page reloads
pub trait PreferenceStore {
    /// Read the value stored under `key`, `Ok(None)` when absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store; values last as long as the store itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("theme").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::with_entry("theme", "dark");
        store.save("theme", "light").unwrap();

        assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.get("theme"), Some("light"));
    }
}
