//! Error handling for WASM bindings

use wasm_bindgen::prelude::*;

use fibwasm_core::FibError;

/// Convert an engine error to the string value thrown on the JS side.
pub fn fib_error_to_js(err: &FibError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

