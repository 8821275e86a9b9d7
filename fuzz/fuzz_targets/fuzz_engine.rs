#![no_main]

use libfuzzer_sys::fuzz_target;

use fibwasm_core::calculator::{FibError, FibonacciEngine};
use fibwasm_core::observers::{NoOpObserver, RecordingObserver};
use fibwasm_core::options::Options;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let raw = i64::from_le_bytes(data[..8].try_into().unwrap());
    let engine = FibonacciEngine::new(Options { report_step: data[8] });
    let recorder = RecordingObserver::new();

    if raw < 0 {
        let result = engine.compute(raw, &recorder);
        assert!(matches!(result, Err(FibError::InvalidInput(_))));
        assert!(recorder.is_empty(), "callback fired for n={raw}");
        return;
    }

    // Cap n for speed
    let n = raw % 20_000;
    let with_progress = engine.compute(n, &recorder).unwrap();
    let without = engine.compute(n, &NoOpObserver).unwrap();

    assert_eq!(with_progress, without, "observer changed F({n})");
    assert!(recorder.is_monotonic(), "progress regressed at n={n}");
    assert_eq!(recorder.last().map(|r| r.percent), Some(100));
});
