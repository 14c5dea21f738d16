use crate::config::{AUDIO_INTERACTED_KEY, AUDIO_INTERACTED_VALUE};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Private-mode or disabled storage reads as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let store = Self::storage().ok_or(StorageError::Unavailable)?;
        store.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn has_interacted(store: &impl KeyValueStore) -> bool {
    store.get(AUDIO_INTERACTED_KEY).as_deref() == Some(AUDIO_INTERACTED_VALUE)
}

pub fn remember_interaction(store: &impl KeyValueStore) {
    match store.set(AUDIO_INTERACTED_KEY, AUDIO_INTERACTED_VALUE) {
        Ok(()) => log::info!("audio interaction remembered"),
        Err(e) => log::warn!("could not persist audio interaction: {}", e),
    }
}
