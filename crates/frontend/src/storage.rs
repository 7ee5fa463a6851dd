//! localStorage-backed key-value store

use chimera_core::storage::KeyValueStore;
use web_sys::Storage;

/// [`KeyValueStore`] over the browser's localStorage.
///
/// Writes are best-effort: when storage is unavailable (disabled, private
/// mode quota) the write is logged and dropped, matching web-storage
/// conventions elsewhere in the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    tracing::warn!("localStorage write failed for {key}: {err:?}");
                }
            }
            None => tracing::warn!("localStorage unavailable, dropping write for {key}"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
