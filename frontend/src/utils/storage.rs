use std::{cell::RefCell, rc::Rc};

use thiserror::Error;
use web_sys::{Storage, Window};

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage rejected the {0} operation")]
    Rejected(&'static str),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// The durable slot holding the bearer token. Absence means logged out.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    /// Removing an empty slot is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

pub type SharedTokenStore = Rc<dyn TokenStore>;

#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self::with_key(config::TOKEN_STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(&self.key)
            .map_err(|_| StorageError::Rejected("read"))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(&self.key, token)
            .map_err(|_| StorageError::Rejected("write"))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|_| StorageError::Rejected("remove"))
    }
}

/// In-process slot used on the host target and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Picks the browser slot on wasm and an in-memory slot elsewhere.
pub fn default_token_store() -> SharedTokenStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryTokenStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_overwrites() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn clearing_an_empty_store_is_a_no_op() {
        let store = MemoryTokenStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clones_share_the_same_slot() {
        let store = MemoryTokenStore::with_token("abc");
        let other = store.clone();
        other.clear().unwrap();
        assert_eq!(store.peek(), None);
    }
}
