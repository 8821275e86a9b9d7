//! Concrete observer implementations.

use std::cell::RefCell;

use tracing::{debug, trace};

use crate::observer::ProgressObserver;
use crate::progress::ProgressReport;

/// Null object pattern. Discards every progress update.
///
/// Stands in for an absent callback so the engine keeps a single code path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _report: &ProgressReport) {
        // Intentionally empty
    }
}

/// Observer that forwards reports to `tracing`.
///
/// Intermediate reports go out at `trace` level, the completion at `debug`.
#[derive(Debug, Clone, Default)]
pub struct LoggingObserver {
    label: Option<String>,
}

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self { label: None }
    }

    /// Create a logging observer that tags every event with `label`.
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, report: &ProgressReport) {
        let label = self.label.as_deref().unwrap_or("fibonacci");
        if report.is_complete() {
            debug!(label, detail = %report.message, "Calculation complete");
        } else {
            trace!(
                label,
                percent = report.percent,
                detail = %report.message,
                "Progress update"
            );
        }
    }
}

/// Observer that keeps every report it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    reports: RefCell<Vec<ProgressReport>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: RefCell::new(Vec::new()),
        }
    }

    /// All reports received so far, in order.
    #[must_use]
    pub fn reports(&self) -> Vec<ProgressReport> {
        self.reports.borrow().clone()
    }

    /// The percent of each report received so far, in order.
    #[must_use]
    pub fn percents(&self) -> Vec<u8> {
        self.reports.borrow().iter().map(|r| r.percent).collect()
    }

    /// The most recent report, if any.
    #[must_use]
    pub fn last(&self) -> Option<ProgressReport> {
        self.reports.borrow().last().cloned()
    }

    /// Number of reports received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    /// Whether no report has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Whether the recorded percents never decrease.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.reports
            .borrow()
            .windows(2)
            .all(|w| w[0].percent <= w[1].percent)
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, report: &ProgressReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}
