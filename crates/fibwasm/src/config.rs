//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use fibwasm_core::Options;

/// How a computed result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// A single JSON object.
    Json,
}

/// fibwasm: arbitrary-precision Fibonacci with live progress.
#[derive(Parser, Debug)]
#[command(name = "fibwasm", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value = "1000",
        env = "FIBWASM_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Print a greeting for NAME instead of computing.
    #[arg(long, value_name = "NAME")]
    pub greet: Option<String>,

    /// Minimum percent advance between two progress reports.
    #[arg(long, default_value = "1", env = "FIBWASM_REPORT_STEP")]
    pub report_step: u8,

    /// Result format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (never truncate the result).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show digit and bit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::with_report_step(self.report_step)
    }

    /// Whether a live progress bar should be drawn.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress && self.format == OutputFormat::Text
    }
}
