//! Browser Storage
//!
//! `localStorage` plays the part the session file plays for the CLI.

use serde_json::Value;
use vexon_core::{CoreError, Result, SessionStore};
use web_sys::Storage;

/// Key set to `"true"` once the cookie banner is acknowledged
pub const COOKIE_CONSENT_KEY: &str = "vexon_cookie_consent";

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| CoreError::StorageUnavailable("localStorage is not accessible".into()))
}

fn rejected(action: &str) -> CoreError {
    CoreError::StorageUnavailable(format!("localStorage refused to {action}"))
}

/// Session store backed by `window.localStorage`
pub struct LocalStorageSessionStore {
    key: String,
}

impl LocalStorageSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn save_raw(&self, value: &Value) -> Result<()> {
        let json = serde_json::to_string(value)?;
        local_storage()?
            .set_item(&self.key, &json)
            .map_err(|_| rejected("write"))
    }

    fn load_raw(&self) -> Result<Option<Value>> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|_| rejected("read"))?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn delete(&self) -> Result<()> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|_| rejected("delete"))
    }
}

/// Whether the cookie banner was already acknowledged
pub fn cookie_consent_given() -> bool {
    local_storage()
        .ok()
        .and_then(|s| s.get_item(COOKIE_CONSENT_KEY).ok().flatten())
        .is_some_and(|v| v == "true")
}

/// Remember that the cookie banner was acknowledged
pub fn give_cookie_consent() {
    let result = local_storage().and_then(|s| {
        s.set_item(COOKIE_CONSENT_KEY, "true")
            .map_err(|_| rejected("write"))
    });
    if let Err(e) = result {
        tracing::warn!("Cookie consent not persisted: {}", e);
    }
}
