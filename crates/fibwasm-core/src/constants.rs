//! Constants for progress reporting and small-index lookups.

/// Percent value of a completed computation.
pub const PERCENT_COMPLETE: u8 = 100;

/// Default granularity (in percent) between two progress reports.
pub const DEFAULT_REPORT_STEP: u8 = 1;

/// Name used by the greeting when the caller supplies none.
pub const DEFAULT_GREETING_NAME: &str = "World";

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used to cross-check the big-integer engine on the range where machine
/// words are still exact.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the native harness.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The requested index was rejected by the engine.
    pub const ERROR_INVALID_INPUT: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[MAX_FIB_U64 as usize], 12_200_160_415_121_876_738);
    }

    #[test]
    fn report_step_within_range() {
        assert!(DEFAULT_REPORT_STEP >= 1);
        assert!(DEFAULT_REPORT_STEP <= PERCENT_COMPLETE);
    }
}
