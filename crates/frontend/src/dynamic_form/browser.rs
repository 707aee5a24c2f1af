//! Browser side effects: `localStorage`, alerts and page reloads

use contracts::shared::storage::{KeyValueStore, StorageError};
use web_sys::window;

/// `window.localStorage` as a [`KeyValueStore`]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// Submit side effects that reach outside the form
pub trait SubmitEffects {
    /// Tell the user the form was submitted
    fn acknowledge(&self, message: &str);
    /// Re-initialize the page so the form is rebuilt from storage
    fn reload(&self);
}

/// `window.alert` and `location.reload()`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl SubmitEffects for BrowserPage {
    fn acknowledge(&self, message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn reload(&self) {
        if let Some(w) = window() {
            if let Err(e) = w.location().reload() {
                log::warn!("Page reload failed: {:?}", e);
            }
        }
    }
}
