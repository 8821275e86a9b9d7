//! Progress tracking types and utilities.

use crate::constants::PERCENT_COMPLETE;

/// Progress update sent from the engine to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    /// Completed share of the work, in [0, 100].
    pub percent: u8,
    /// Human-readable description of the current step.
    pub message: String,
}

impl ProgressReport {
    /// Create a new progress report.
    #[must_use]
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent: percent.min(PERCENT_COMPLETE),
            message: message.into(),
        }
    }

    /// Create a completion report.
    #[must_use]
    pub fn complete(message: impl Into<String>) -> Self {
        Self::new(PERCENT_COMPLETE, message)
    }

    /// Whether this report marks the end of a computation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent == PERCENT_COMPLETE
    }
}

/// Floored percentage of `done` out of `total` steps.
///
/// An empty workload counts as complete.
///
/// # Example
/// ```
/// use fibwasm_core::progress::percent_complete;
///
/// assert_eq!(percent_complete(1, 3), 33);
/// assert_eq!(percent_complete(3, 3), 100);
/// assert_eq!(percent_complete(0, 0), 100);
/// ```
#[must_use]
pub fn percent_complete(done: u64, total: u64) -> u8 {
    if total == 0 {
        return PERCENT_COMPLETE;
    }
    let ratio = u128::from(done.min(total)) * u128::from(PERCENT_COMPLETE) / u128::from(total);
    u8::try_from(ratio).unwrap_or(PERCENT_COMPLETE)
}

/// Decides when a running loop should emit a report.
///
/// Percents below 100 only come out of [`advance`](Self::advance), and only
/// once they have grown by at least the configured step. The single 100
/// comes out of [`finish`](Self::finish). Together this keeps the reported
/// sequence non-decreasing and terminated by exactly one 100.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total_steps: u64,
    step: u8,
    next_threshold: u8,
    last_reported: Option<u8>,
}

impl ProgressTracker {
    /// Create a tracker over `total_steps` units of work.
    #[must_use]
    pub fn new(total_steps: u64, step: u8) -> Self {
        let step = step.clamp(1, PERCENT_COMPLETE);
        Self {
            total_steps,
            step,
            next_threshold: step,
            last_reported: None,
        }
    }

    /// Record that `steps_done` units are finished. Returns the percent to
    /// report, if any.
    pub fn advance(&mut self, steps_done: u64) -> Option<u8> {
        let percent = percent_complete(steps_done, self.total_steps);
        if percent >= PERCENT_COMPLETE || percent < self.next_threshold {
            return None;
        }
        self.last_reported = Some(percent);
        self.next_threshold = percent.saturating_add(self.step);
        Some(percent)
    }

    /// Mark the work as done. Returns 100 the first time it is called.
    pub fn finish(&mut self) -> Option<u8> {
        if self.last_reported == Some(PERCENT_COMPLETE) {
            return None;
        }
        self.last_reported = Some(PERCENT_COMPLETE);
        Some(PERCENT_COMPLETE)
    }

    /// The most recent percent handed out.
    #[must_use]
    pub fn last_reported(&self) -> Option<u8> {
        self.last_reported
    }

    /// Total units of work being tracked.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
