//! Key-value storage seam
//!
//! The browser frontend backs this with localStorage; tests and native
//! tooling use [`MemoryStore`]. Semantics are those of web storage:
//! string keys and values, single writer, last write wins.

use std::collections::HashMap;
use std::sync::Mutex;

/// Persistent string key-value store.
///
/// Writes are best-effort: an implementation that cannot persist (storage
/// disabled, quota exceeded) logs and drops the write rather than failing
/// the caller.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and non-browser tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .remove(key);
    }
}
