//! JavaScript value helpers

use wasm_bindgen::{JsCast, JsValue};

/// Human-readable description of a thrown JS value
///
/// Prefers the `message` of an `Error`, then a plain string, then the debug
/// representation.
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    match value.as_string() {
        Some(text) => text,
        None => format!("{:?}", value),
    }
}
