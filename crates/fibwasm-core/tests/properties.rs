//! Property-based tests for the Fibonacci engine.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibwasm_core::calculator::{FibError, FibonacciEngine};
use fibwasm_core::observers::{NoOpObserver, RecordingObserver};
use fibwasm_core::options::Options;

fn compute_value(n: i64) -> BigUint {
    FibonacciEngine::default()
        .compute_value(n, &NoOpObserver)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every negative index is rejected without touching the observer.
    #[test]
    fn negative_indices_rejected(n in i64::MIN..0) {
        let recorder = RecordingObserver::new();
        let result = FibonacciEngine::default().compute(n, &recorder);
        prop_assert!(matches!(result, Err(FibError::InvalidInput(_))));
        prop_assert!(recorder.is_empty());
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0i64..2000) {
        let sum = compute_value(n) + compute_value(n + 1);
        prop_assert_eq!(sum, compute_value(n + 2), "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Reported percents never decrease and end with a single 100.
    #[test]
    fn progress_monotonic_and_complete(n in 0i64..3000, step in 0u8..=120) {
        let engine = FibonacciEngine::new(Options { report_step: step });
        let recorder = RecordingObserver::new();
        engine.compute(n, &recorder).unwrap();

        let percents = recorder.percents();
        prop_assert!(recorder.is_monotonic());
        prop_assert_eq!(percents.last().copied(), Some(100));
        prop_assert_eq!(percents.iter().filter(|&&p| p == 100).count(), 1);
    }

    /// Consecutive intermediate reports are at least one report step apart.
    #[test]
    fn progress_respects_report_step(n in 2i64..3000, step in 1u8..=50) {
        let engine = FibonacciEngine::new(Options::with_report_step(step));
        let recorder = RecordingObserver::new();
        engine.compute(n, &recorder).unwrap();

        let percents = recorder.percents();
        let intermediate = &percents[..percents.len() - 1];
        prop_assert!(intermediate.iter().all(|&p| p >= step));
        prop_assert!(intermediate.windows(2).all(|w| w[1] - w[0] >= step));
    }

    /// Progress reporting never changes the numeric outcome.
    #[test]
    fn observer_independent_result(n in 0i64..1500) {
        let engine = FibonacciEngine::default();
        let recorder = RecordingObserver::new();
        prop_assert_eq!(
            engine.compute(n, &NoOpObserver).unwrap(),
            engine.compute(n, &recorder).unwrap()
        );
    }

    /// The decimal form never carries a sign or leading zeros.
    #[test]
    fn canonical_decimal(n in 0i64..1500) {
        let digits = FibonacciEngine::default().compute(n, &NoOpObserver).unwrap();
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(digits == "0" || !digits.starts_with('0'));
        prop_assert_eq!(digits == "0", n == 0);
    }
}
