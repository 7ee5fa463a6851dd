//! Browser glue helpers

use wasm_bindgen::JsValue;

/// Hostname the shell is currently served from, empty outside a browser.
pub fn current_hostname() -> String {
    web_sys::window()
        .map(|window| window.location().hostname().unwrap_or_default())
        .unwrap_or_default()
}

/// URL fragment including the leading `#`, empty when absent.
pub fn current_fragment() -> String {
    web_sys::window()
        .map(|window| window.location().hash().unwrap_or_default())
        .unwrap_or_default()
}

/// Remove a processed deep link from the address bar so a reload does not
/// replay it.
pub fn clear_deep_link_from_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(hash) = location.hash() else {
        return;
    };
    if hash.is_empty() {
        return;
    }
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = window.history() {
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&pathname)) {
            tracing::warn!("failed to clear deep link from url: {err:?}");
        }
    }
}
