//! `localStorage`-backed preference store.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be missing or throw (private browsing, disabled cookies). Both
//! degrade to "nothing saved" so the theme still works for the session.

use web_sys::{Storage, Window};

use super::js_error;
use crate::binding::PreferenceStore;

#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_error(err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage.getItem({key}) failed: {}", js_error(err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("localStorage.setItem({key}) failed: {}", js_error(err));
        }
    }
}
