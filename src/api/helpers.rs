//! Shared helpers for the WASM API
//!
//! Serialization, configuration decoding and error conversion at the
//! JavaScript boundary.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ShowcaseConfig;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Configuration
// ============================================================================

/// Decode an optional config object; `undefined` and `null` mean defaults
pub fn config_from_js(value: JsValue) -> Result<ShowcaseConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ShowcaseConfig::default());
    }

    let config: ShowcaseConfig = deserialize(value, "Invalid showcase config")?;
    config.validate().map_err(js_error)?;
    Ok(config)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an error into the string JS callers receive
pub fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
