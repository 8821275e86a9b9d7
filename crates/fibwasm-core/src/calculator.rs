//! The Fibonacci engine and its error type.
//!
//! `FibonacciEngine` validates the index, advances a `(prev, curr)` pair of
//! big integers by repeated addition, and hands progress to an observer as
//! it goes. Callers without a callback pass a `NoOpObserver`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{ProgressReport, ProgressTracker};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is outside the computable domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Computes F(n) exactly, reporting progress while it runs.
#[derive(Debug, Clone, Default)]
pub struct FibonacciEngine {
    opts: Options,
}

impl FibonacciEngine {
    /// Create a new engine with the given options.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    /// The options this engine runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Compute F(n) as its decimal representation.
    ///
    /// # Example
    /// ```
    /// use fibwasm_core::calculator::FibonacciEngine;
    /// use fibwasm_core::observers::NoOpObserver;
    ///
    /// let engine = FibonacciEngine::default();
    /// assert_eq!(engine.compute(10, &NoOpObserver).unwrap(), "55");
    /// assert!(engine.compute(-1, &NoOpObserver).is_err());
    /// ```
    pub fn compute(&self, n: i64, observer: &dyn ProgressObserver) -> Result<String, FibError> {
        self.compute_value(n, observer).map(|value| value.to_string())
    }

    /// Compute F(n) as a big integer.
    pub fn compute_value(
        &self,
        n: i64,
        observer: &dyn ProgressObserver,
    ) -> Result<BigUint, FibError> {
        let n = validate_index(n)?;
        let mut tracker = ProgressTracker::new(n.saturating_sub(1), self.opts.report_step);
        debug!(n, steps = tracker.total_steps(), "Starting Fibonacci computation");

        let value = match n {
            0 => BigUint::zero(),
            1 => BigUint::one(),
            _ => Self::iterate(n, &mut tracker, observer),
        };

        if let Some(percent) = tracker.finish() {
            observer.on_progress(&ProgressReport::new(percent, format!("Computed F({n})")));
        }
        debug!(n, bits = value.bits(), "Fibonacci computation finished");
        Ok(value)
    }

    /// Advance `(F(0), F(1))` by `n - 1` additions. Requires `n >= 2`.
    fn iterate(n: u64, tracker: &mut ProgressTracker, observer: &dyn ProgressObserver) -> BigUint {
        let total = tracker.total_steps();
        let mut prev = BigUint::zero();
        let mut curr = BigUint::one();

        for step in 1..=total {
            let next = &prev + &curr;
            prev = std::mem::replace(&mut curr, next);

            if let Some(percent) = tracker.advance(step) {
                observer.on_progress(&ProgressReport::new(
                    percent,
                    format!("Computing F({n}): step {step} of {total}"),
                ));
            }
        }

        curr
    }
}

/// Reject negative indices before any work is done.
fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n)
        .map_err(|_| FibError::InvalidInput(format!("n must be non-negative, got {n}")))
}
