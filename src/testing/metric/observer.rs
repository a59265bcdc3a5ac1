use crate::api::metrics::{sdk_api::ObserverImpl, AnyObserverResult, ObserverCallback};
use crate::testing::metric::{MeterState, MockInstrument, MockMeter};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// The single callback signature observers are stored with, whatever their
/// number kind.
pub(crate) type Callback = Box<dyn Fn(AnyObserverResult) + Send + Sync>;

/// An observer registered with a `MockMeter`.
///
/// Starts live; `unregister` marks it dead and it stays dead. Dead observers
/// stay in `MockMeter::observers` but are skipped by
/// `MockMeter::run_observers`.
pub struct MockObserver {
    instrument: MockInstrument,
    meter: Weak<MeterState>,
    dead: AtomicBool,
    callback: Callback,
}

impl MockObserver {
    pub(crate) fn new(instrument: MockInstrument, meter: Weak<MeterState>, callback: Callback) -> Self {
        MockObserver {
            instrument,
            meter,
            dead: AtomicBool::new(false),
            callback,
        }
    }

    /// The observer's instrument.
    pub fn instrument(&self) -> &MockInstrument {
        &self.instrument
    }

    /// The meter the observer was registered with, if it is still alive.
    pub fn meter(&self) -> Option<MockMeter> {
        self.meter.upgrade().map(MockMeter::from_state)
    }

    /// Returns `true` once the observer has been unregistered.
    pub fn is_dead(&self) -> bool {
        self.dead.load(Ordering::SeqCst)
    }

    pub(crate) fn run(&self) {
        let result = AnyObserverResult::new(
            self.instrument.number_kind(),
            Arc::new(self.instrument.clone()),
        );
        (self.callback)(result)
    }
}

impl ObserverImpl for MockObserver {
    fn unregister(&self) {
        if !self.dead.swap(true, Ordering::SeqCst) {
            tracing::debug!(instrument = self.instrument.name(), "unregistered observer");
        }
    }
}

impl fmt::Debug for MockObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockObserver")
            .field("instrument", &self.instrument)
            .field("dead", &self.is_dead())
            .finish()
    }
}

pub(crate) fn wrap_i64_observer_callback(callback: Option<ObserverCallback<i64>>) -> Callback {
    match callback {
        None => Box::new(|_: AnyObserverResult| {}),
        Some(callback) => Box::new(move |result: AnyObserverResult| match result {
            AnyObserverResult::I64(result) => callback(result),
            AnyObserverResult::F64(_) => panic!("i64 observer polled with an f64 result"),
        }),
    }
}

pub(crate) fn wrap_f64_observer_callback(callback: Option<ObserverCallback<f64>>) -> Callback {
    match callback {
        None => Box::new(|_: AnyObserverResult| {}),
        Some(callback) => Box::new(move |result: AnyObserverResult| match result {
            AnyObserverResult::F64(result) => callback(result),
            AnyObserverResult::I64(_) => panic!("f64 observer polled with an i64 result"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::metrics::{Meter, MetricOptions, ObserverResult};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn unregister_is_idempotent() {
        let meter = MockMeter::new("test");
        let observer = meter.register_i64_observer("idle", None, MetricOptions::default());

        assert!(!meter.observers()[0].is_dead());
        observer.unregister();
        observer.unregister();
        assert!(meter.observers()[0].is_dead());
        assert_eq!(meter.observers().len(), 1);
    }

    #[test]
    fn dead_observers_are_skipped() {
        let meter = MockMeter::new("test");
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let observer = meter.register_i64_observer(
            "polls",
            Some(Box::new(move |_: ObserverResult<i64>| {
                counted.fetch_add(1, Ordering::SeqCst);
            })),
            MetricOptions::default(),
        );

        meter.run_observers();
        observer.unregister();
        meter.run_observers();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn observer_knows_its_meter() {
        let meter = MockMeter::new("test");
        meter.register_f64_observer("load", None, MetricOptions::default());

        let observers = meter.observers();
        assert!(observers[0].meter().map_or(false, |owner| owner.ptr_eq(&meter)));
        assert_eq!(observers[0].instrument().name(), "load");
    }

    #[test]
    #[should_panic(expected = "i64 observer polled with an f64 result")]
    fn mismatched_result_kind_panics() {
        let meter = MockMeter::new("test");
        meter.register_f64_observer("load", None, MetricOptions::default());
        let instrument = meter.observers()[0].instrument().clone();
        let callback = wrap_i64_observer_callback(Some(Box::new(|_: ObserverResult<i64>| {})));
        callback(AnyObserverResult::F64(ObserverResult::new(Arc::new(instrument))));
    }
}
