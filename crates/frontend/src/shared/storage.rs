//! Thin wrappers over `window.localStorage`.
//!
//! Every helper is best-effort: a missing window, disabled storage or a
//! quota error is logged and otherwise ignored.

use serde::{de::DeserializeOwned, Serialize};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_raw(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str::<T>(&raw).ok()
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("localStorage: failed to save {}", key);
    }
}
