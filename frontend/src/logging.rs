//! Browser console logging.

use std::fmt::Display;

use wasm_bindgen::JsValue;

/// Logs a failed operation with its detail. Views show their own fixed text.
pub fn error(context: &str, err: impl Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[zetho-admin] {context}: {err}")));
}

/// Lifecycle note.
pub fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(&format!("[zetho-admin] {message}")));
}
