//! `localStorage` implementation of [`PreferenceStore`]

use folio_core::{Error, PreferenceStore, Result};

/// Browser `localStorage`, looked up on every access
///
/// Holds no JS handle, so it can live inside thread-safe signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage> {
    // Throws in some private-browsing modes; treat that as "no storage"
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(Error::StorageUnavailable)
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::storage_read(key, format!("{e:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage_write(key, format!("{e:?}")))
    }
}
