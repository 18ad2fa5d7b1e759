use gloo_storage::{LocalStorage, Storage};
use crate::error::{BoardError, BoardResult};

/// Raw string key/value persistence. The browser build uses localStorage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> BoardResult<()>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> BoardResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| BoardError::Storage(format!("Error saving to localStorage: {:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
