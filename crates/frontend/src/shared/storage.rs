//! `window.localStorage` as a [`KeyValueStore`].
//!
//! The handle is looked up on every call, so the type is a plain marker and
//! can live inside reactive signals. Outside a browser, or with storage
//! blocked by privacy settings, the store reports itself unavailable.

use contracts::shared::key_value::{KeyValueStore, StorageError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn is_available(&self) -> bool {
        get_local_storage().is_some()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(js_error)
    }
}
