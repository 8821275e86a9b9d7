//! Progress observer backed by a JavaScript function.

use wasm_bindgen::prelude::*;

use fibwasm_core::{ProgressObserver, ProgressReport};

/// Forwards each report to a JS callback as `(percent, message)`.
pub struct JsProgressObserver {
    callback: js_sys::Function,
}

impl JsProgressObserver {
    /// Wrap a JS function.
    #[must_use]
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl ProgressObserver for JsProgressObserver {
    fn on_progress(&self, report: &ProgressReport) {
        let percent = JsValue::from(report.percent);
        let message = JsValue::from_str(&report.message);
        // A throwing callback must not abort the computation.
        if let Err(err) = self.callback.call2(&JsValue::UNDEFINED, &percent, &message) {
            tracing::warn!(
                percent = report.percent,
                error = ?err,
                "Progress callback threw"
            );
        }
    }
}
