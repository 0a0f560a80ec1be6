//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization, deserialization
//! and error conversion across all API operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(error_context, e))
}

/// Like `deserialize`, but `undefined`/`null` yield `T::default()`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| to_js_error(error_context, e))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JS string value
pub fn to_js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let msg = if context.is_empty() {
        err.to_string()
    } else {
        format!("{}: {}", context, err)
    };
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Host Clock
// ============================================================================

/// Milliseconds from `performance.now()`, falling back to `Date.now()`
/// where no window is available (e.g. in a worker)
pub fn host_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
