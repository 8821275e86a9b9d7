//! Result presentation for text and JSON output.

use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{format_duration, format_index, format_result};
use crate::ui;

/// Machine-readable form of one computation.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    /// Index that was computed.
    pub n: u64,
    /// Exact decimal digits of F(n).
    pub result: String,
    /// Number of decimal digits.
    pub digits: usize,
    /// Bit length of F(n).
    pub bits: u64,
    /// Wall-clock time spent in the engine, in milliseconds.
    pub duration_ms: f64,
}

impl ResultRecord {
    /// Build a record from a finished computation.
    #[must_use]
    pub fn new(n: u64, value: &BigUint, duration: Duration) -> Self {
        let result = value.to_string();
        Self {
            n,
            digits: result.len(),
            bits: value.bits(),
            result,
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }
}

/// Writes results to stdout.
pub struct ResultPresenter {
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl ResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            format,
            verbose,
            quiet,
            details,
        }
    }

    /// Present F(n).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON record cannot be serialized.
    pub fn present(&self, n: u64, value: &BigUint, duration: Duration) -> anyhow::Result<()> {
        if self.format == OutputFormat::Json {
            let record = ResultRecord::new(n, value, duration);
            println!("{}", serde_json::to_string(&record)?);
            return Ok(());
        }

        if self.quiet {
            println!("{value}");
            return Ok(());
        }

        ui::print_header(&format!("F({})", format_index(n)));
        ui::print_field("Duration", &format_duration(duration));
        if self.details {
            ui::print_field("Bits", &value.bits().to_string());
            ui::print_field("Digits", &value.to_string().len().to_string());
        }
        ui::print_field("Value", &format_result(value, self.verbose));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_digits_and_bits() {
        let record = ResultRecord::new(20, &BigUint::from(6765u32), Duration::from_millis(2));
        assert_eq!(record.result, "6765");
        assert_eq!(record.digits, 4);
        assert_eq!(record.bits, 13);
        assert!((record.duration_ms - 2.0).abs() < 1e-9);
    }

    #[test]
    fn record_serializes_result_as_string() {
        let record = ResultRecord::new(10, &BigUint::from(55u32), Duration::ZERO);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["result"], "55");
        assert_eq!(json["n"], 10);
    }

    #[test]
    fn present_all_modes() {
        let value = BigUint::from(55u32);
        for format in [OutputFormat::Text, OutputFormat::Json] {
            for (verbose, quiet, details) in [(false, false, false), (true, true, true)] {
                ResultPresenter::new(format, verbose, quiet, details)
                    .present(10, &value, Duration::from_millis(1))
                    .unwrap();
            }
        }
    }
}
