//! `window.localStorage` adapter for the persistence port.

use sanamana_core::{KeyValueStore, Result, SanamanaError};
use wasm_bindgen::JsValue;

/// Stateless handle; the `Storage` object is looked up on every call so the
/// handle can live in reactive context.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(action: &str, err: JsValue) -> SanamanaError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    SanamanaError::Storage(format!("Failed to {}: {}", action, detail))
}

fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| SanamanaError::Storage("No window object".to_string()))?;
    window
        .local_storage()
        .map_err(|e| js_error("open local storage", e))?
        .ok_or_else(|| SanamanaError::Storage("Local storage is unavailable".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| js_error("read", e))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| js_error("write", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| js_error("remove", e))
    }
}
