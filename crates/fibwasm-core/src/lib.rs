//! # fibwasm-core
//!
//! Arbitrary-precision Fibonacci engine with synchronous progress
//! reporting, shared by the browser bindings and the native harness.

pub mod calculator;
pub mod constants;
pub mod greet;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;

// Re-exports
pub use calculator::{FibError, FibonacciEngine};
pub use constants::{exit_codes, DEFAULT_REPORT_STEP, FIB_TABLE, MAX_FIB_U64, PERCENT_COMPLETE};
pub use greet::greet;
pub use observer::{ProgressObserver, ProgressSubject};
pub use observers::{LoggingObserver, NoOpObserver, RecordingObserver};
pub use options::Options;
pub use progress::ProgressReport;

/// Compute F(n) as a decimal string with default options and no progress
/// reporting.
///
/// For progress callbacks or a custom report cadence, use
/// [`FibonacciEngine`] directly.
///
/// # Example
/// ```
/// assert_eq!(fibwasm_core::fibonacci(10).unwrap(), "55");
/// assert_eq!(fibwasm_core::fibonacci(0).unwrap(), "0");
/// assert!(fibwasm_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<String, FibError> {
    FibonacciEngine::default().compute(n, &NoOpObserver)
}

/// Compute F(n) as a decimal string, reporting progress to `observer`.
pub fn fibonacci_with_progress(
    n: i64,
    observer: &dyn ProgressObserver,
) -> Result<String, FibError> {
    FibonacciEngine::default().compute(n, observer)
}
