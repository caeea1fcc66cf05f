//! String key-value storage capability.
//!
//! The storage layer only moves raw strings around; encoding is the job of
//! the repositories built on top of it. Backends: browser `localStorage`
//! (frontend crate) and [`MemoryStore`] for hosts and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous string store addressed by key.
///
/// `is_available` lets callers check the capability once instead of
/// probing the platform on every call. Backends that are not available
/// answer every operation with [`StorageError::Unavailable`].
pub trait KeyValueStore {
    fn is_available(&self) -> bool {
        true
    }

    /// Read a value. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-process store backed by a `HashMap`.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    available: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            available: true,
        }
    }

    /// A store that reports itself unavailable, like a browser with
    /// storage disabled.
    pub fn unavailable() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            available: false,
        }
    }

    /// Store pre-filled with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v1").unwrap();
        store.set_item("k", "v2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_unavailable_store_refuses_everything() {
        let store = MemoryStore::unavailable();
        assert!(!store.is_available());
        assert!(matches!(store.get_item("k"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set_item("k", "v"), Err(StorageError::Unavailable)));
        assert!(matches!(store.remove_item("k"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_shared_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let handle = Rc::clone(&store);
        handle.set_item("carts", "[]").unwrap();
        assert_eq!(store.get_item("carts").unwrap().as_deref(), Some("[]"));
    }
}
