#![no_main]

use libfuzzer_sys::fuzz_target;

use fibwasm_core::progress::ProgressTracker;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let total = u64::from(u16::from_le_bytes([data[0], data[1]]));
    let step = data[2];

    let mut tracker = ProgressTracker::new(total, step);
    let mut last = 0u8;
    for done in 1..=total {
        if let Some(percent) = tracker.advance(done) {
            assert!(percent >= last && percent < 100);
            last = percent;
        }
    }
    assert_eq!(tracker.finish(), Some(100));
    assert_eq!(tracker.finish(), None);
});
