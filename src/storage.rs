//! Session-scoped key-value storage
//!
//! The controller never reaches into browser storage directly; it receives
//! a `SessionStore` capability so tests can substitute an in-memory fake
//! for the real sessionStorage.

use std::collections::HashMap;

/// Session-scoped key-value capability
///
/// Failures never surface to callers: an unavailable or disabled store
/// reads as absent and drops writes, so the page is never blocked on
/// storage access.
pub trait SessionStore {
    /// Read a key, `None` if absent or the read failed
    fn get(&self, key: &str) -> Option<String>;
    /// Best-effort write; implementations swallow (and log) failures
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the native demo
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// sessionStorage-backed store (WASM only)
///
/// The backing store lives for one browsing session: entries survive
/// reloads in the same tab and vanish when the tab closes.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten();

        match storage {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("sessionStorage write failed for '{}'", key);
                }
            }
            None => log::warn!("sessionStorage unavailable, '{}' not persisted", key),
        }
    }
}
