//! Terminal progress bar fed by engine reports.

use indicatif::{ProgressBar, ProgressStyle};

use fibwasm_core::{ProgressObserver, ProgressReport, PERCENT_COMPLETE};

const BAR_TEMPLATE: &str = "{prefix:.bold} [{bar:40.cyan/blue}] {pos:>3}% {msg}";

/// Observer that draws reports on an `indicatif` progress bar.
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    /// Create a bar labelled with the index being computed.
    #[must_use]
    pub fn new(n: i64) -> Self {
        Self::with_bar(ProgressBar::new(u64::from(PERCENT_COMPLETE)), n)
    }

    /// Create a bar that tracks position without drawing anything.
    #[must_use]
    pub fn hidden(n: i64) -> Self {
        Self::with_bar(ProgressBar::hidden(), n)
    }

    fn with_bar(bar: ProgressBar, n: i64) -> Self {
        bar.set_length(u64::from(PERCENT_COMPLETE));
        bar.set_style(bar_style());
        bar.set_prefix(format!("F({n})"));
        Self { bar }
    }

    /// Current position of the bar, in percent.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for BarObserver {
    fn on_progress(&self, report: &ProgressReport) {
        self.bar.set_position(u64::from(report.percent));
        self.bar.set_message(report.message.clone());
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}
