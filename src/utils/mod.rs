//! Utility helpers shared by the browser adapters

pub mod js;

pub use js::describe_js_value;
