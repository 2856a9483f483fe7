//! Browser `localStorage` backend and `storage` event listener.

use super::storage::{StorageBackend, StorageEvent};
use crate::error::StorageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// The window's `localStorage`. Fails outside a window context or when
    /// storage is disabled (e.g. some private browsing modes).
    pub fn local() -> Result<Self, StorageError> {
        let window = window()?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }

    /// Call `callback` for every `storage` event, i.e. every change made by
    /// another tab of the same origin. The listener lives until the returned
    /// handle is dropped.
    pub fn on_change<F>(&self, mut callback: F) -> Result<StorageListener, StorageError>
    where
        F: FnMut(StorageEvent) + 'static,
    {
        let window = window()?;
        let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                callback(StorageEvent {
                    key: event.key(),
                    new_value: event.new_value(),
                });
            },
        );
        window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .map_err(|e| StorageError::Unavailable(describe(&e)))?;
        Ok(StorageListener { window, closure })
    }
}

impl StorageBackend for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(map_js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(map_js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(map_js_error)
    }
}

/// Registered `storage` listener. Removed on drop.
pub struct StorageListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut(web_sys::StorageEvent)>,
}

impl Drop for StorageListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("storage", self.closure.as_ref().unchecked_ref());
    }
}

fn window() -> Result<web_sys::Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))
}

fn map_js_error(err: JsValue) -> StorageError {
    let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    match name.as_deref() {
        Some("QuotaExceededError") => StorageError::QuotaExceeded,
        _ => StorageError::Unavailable(describe(&err)),
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
