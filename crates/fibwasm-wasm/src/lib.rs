//! WebAssembly bindings for fibwasm
//!
//! Exposes the Fibonacci engine to JavaScript. Big results and errors
//! cross the boundary as strings.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { fibonacci, greet } from 'fibwasm-wasm';
//!
//! await init();
//!
//! console.log(greet("Developer"));
//! const digits = fibonacci(1000, (percent, message) => {
//!     console.log(`${percent}% ${message}`);
//! });
//! console.log("F(1000) =", digits);
//! ```

use wasm_bindgen::prelude::*;

mod error;
mod observer;

pub use error::*;
pub use observer::*;

use fibwasm_core::{FibonacciEngine, NoOpObserver, Options, ProgressObserver};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Route Rust panics to the browser console
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Return a greeting for `name`.
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    fibwasm_core::greet(name)
}

/// Compute the `n`th Fibonacci number as a decimal string.
///
/// `on_progress`, when given, is called as `on_progress(percent, message)`
/// while the computation runs. A negative `n` is rejected with a string
/// error and no callback invocations.
#[wasm_bindgen]
pub fn fibonacci(n: i32, on_progress: Option<js_sys::Function>) -> Result<String, JsValue> {
    let js_observer = on_progress.map(JsProgressObserver::new);
    let observer: &dyn ProgressObserver = match &js_observer {
        Some(callback) => callback,
        None => &NoOpObserver,
    };

    FibonacciEngine::new(Options::default())
        .compute(i64::from(n), observer)
        .map_err(|err| fib_error_to_js(&err))
}
