//! Engine options and configuration.

use crate::constants::{DEFAULT_REPORT_STEP, PERCENT_COMPLETE};

/// Options for a Fibonacci computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Minimum percent advance between two progress reports.
    pub report_step: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            report_step: DEFAULT_REPORT_STEP,
        }
    }
}

impl Options {
    /// Create options with the given report step.
    #[must_use]
    pub fn with_report_step(report_step: u8) -> Self {
        Self { report_step }.normalize()
    }

    /// Normalize options, applying defaults where values are zero and
    /// clamping the report step to a whole computation.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.report_step == 0 {
            self.report_step = DEFAULT_REPORT_STEP;
        }
        self.report_step = self.report_step.min(PERCENT_COMPLETE);
        self
    }
}
