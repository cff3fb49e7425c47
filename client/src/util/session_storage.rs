//! Browser `sessionStorage` adapter behind a small swappable interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cart and auth state persist a handful of values for the lifetime of the
//! browser tab. State containers talk to [`SessionStore`] instead of reaching
//! for `web_sys` directly, so native tests and SSR can substitute
//! [`MemorySession`] and hydrate builds use [`BrowserSession`].
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort: quota errors, a missing window, or malformed JSON
//! read back as "nothing stored" and never reach the UI.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw string key/value persistence scoped to the browsing session.
pub trait SessionStore {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str);
    /// Delete the entry for `key`. Deleting a missing key is a no-op.
    fn clear(&self, key: &str);
}

/// Read and decode a JSON value. Malformed or mistyped JSON yields `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl SessionStore, key: &str) -> Option<T> {
    let raw = store.load(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(store: &impl SessionStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store.save(key, &raw);
}

/// `window.sessionStorage` in the browser; a no-op everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("sessionStorage write failed for {key}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by native tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStore for MemorySession {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
