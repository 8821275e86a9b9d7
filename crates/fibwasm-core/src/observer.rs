//! Observer pattern for progress tracking.
//!
//! Observers are called synchronously on the computing thread, one report
//! at a time. The trait carries no `Send`/`Sync` bound so that handles into
//! a single-threaded host (such as a browser function) can implement it.

use crate::progress::ProgressReport;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver {
    /// Receive a progress update.
    fn on_progress(&self, report: &ProgressReport);
}

/// Any `(percent, message)` closure is an observer.
impl<F> ProgressObserver for F
where
    F: Fn(u8, &str),
{
    fn on_progress(&self, report: &ProgressReport) {
        self(report.percent, &report.message);
    }
}

/// Subject that fans reports out to a collection of borrowed observers.
#[derive(Default)]
pub struct ProgressSubject<'a> {
    observers: Vec<&'a dyn ProgressObserver>,
}

impl<'a> ProgressSubject<'a> {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn register(&mut self, observer: &'a dyn ProgressObserver) {
        self.observers.push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.len()
    }
}

impl ProgressObserver for ProgressSubject<'_> {
    fn on_progress(&self, report: &ProgressReport) {
        for observer in &self.observers {
            observer.on_progress(report);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::observers::{NoOpObserver, RecordingObserver};

    #[test]
    fn closure_is_observer() {
        let seen = RefCell::new(Vec::new());
        let callback = |percent: u8, message: &str| {
            seen.borrow_mut().push((percent, message.to_string()));
        };
        callback.on_progress(&ProgressReport::new(10, "ten"));
        callback.on_progress(&ProgressReport::complete("done"));
        assert_eq!(
            *seen.borrow(),
            vec![(10, "ten".to_string()), (100, "done".to_string())]
        );
    }

    #[test]
    fn subject_register_and_count() {
        let noop = NoOpObserver::new();
        let mut subject = ProgressSubject::new();
        assert_eq!(subject.count(), 0);
        subject.register(&noop);
        subject.register(&noop);
        assert_eq!(subject.count(), 2);
    }

    #[test]
    fn subject_clear_removes_all() {
        let noop = NoOpObserver::new();
        let mut subject = ProgressSubject::new();
        subject.register(&noop);
        subject.clear();
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn subject_notifies_in_order() {
        let order = RefCell::new(Vec::new());
        let first = |_: u8, _: &str| order.borrow_mut().push("first");
        let second = |_: u8, _: &str| order.borrow_mut().push("second");
        let mut subject = ProgressSubject::new();
        subject.register(&first);
        subject.register(&second);

        subject.on_progress(&ProgressReport::new(5, "five"));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn subject_forwards_to_borrowed_observer() {
        let recorder = RecordingObserver::new();
        let calls = Cell::new(0);
        let counter = |_: u8, _: &str| calls.set(calls.get() + 1);
        {
            let mut subject = ProgressSubject::new();
            subject.register(&recorder);
            subject.register(&counter);
            subject.on_progress(&ProgressReport::new(50, "half"));
        }
        assert_eq!(recorder.percents(), vec![50]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subject_notify_empty_does_not_panic() {
        let subject = ProgressSubject::default();
        subject.on_progress(&ProgressReport::new(1, "one"));
    }
}
