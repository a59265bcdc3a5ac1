//! Observer instruments
//!
//! Observers are pull instruments: instead of recording when application code
//! runs, they register a callback that the meter implementation invokes when
//! it decides to collect. Whatever the callback passes to
//! `ObserverResult::observe` is recorded at that point.
use crate::api::metrics::{sdk_api, Number, NumberKind};
use crate::api::Context;
use std::marker;
use std::sync::Arc;

/// A callback supplied when registering an observer of values of type `T`.
pub type ObserverCallback<T> = Box<dyn Fn(ObserverResult<T>) + Send + Sync>;

/// Handed to an observer callback to report the observed values.
#[derive(Debug)]
pub struct ObserverResult<T> {
    instrument: Arc<dyn sdk_api::InstrumentImpl>,
    _marker: marker::PhantomData<T>,
}

impl<T> ObserverResult<T>
where
    T: Into<Number>,
{
    /// Create a result that records into `instrument`.
    pub fn new(instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        ObserverResult {
            instrument,
            _marker: marker::PhantomData,
        }
    }

    /// Records `value` with the given labels, using the background context.
    pub fn observe(&self, value: T, labels: &dyn sdk_api::LabelSet) {
        self.instrument
            .record_one_with_context(&Context::new(), value.into(), labels)
    }
}

/// An observer result of either number kind.
///
/// Meter implementations hold one callback signature taking this type and
/// hand each registered callback the variant matching its number kind.
#[derive(Debug)]
pub enum AnyObserverResult {
    /// Result for an `i64` observer
    I64(ObserverResult<i64>),
    /// Result for an `f64` observer
    F64(ObserverResult<f64>),
}

impl AnyObserverResult {
    /// Create the result variant for `number_kind`, recording into
    /// `instrument`.
    pub fn new(number_kind: &NumberKind, instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        match number_kind {
            NumberKind::I64 => AnyObserverResult::I64(ObserverResult::new(instrument)),
            NumberKind::F64 => AnyObserverResult::F64(ObserverResult::new(instrument)),
        }
    }
}

/// A registered observer of values of type `T`.
#[derive(Debug)]
pub struct Observer<T> {
    observer: Arc<dyn sdk_api::ObserverImpl>,
    _marker: marker::PhantomData<T>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Observer {
            observer: self.observer.clone(),
            _marker: marker::PhantomData,
        }
    }
}

impl<T> Observer<T> {
    /// Wraps an observer implementation in the typed surface.
    pub fn new(observer: Arc<dyn sdk_api::ObserverImpl>) -> Self {
        Observer {
            observer,
            _marker: marker::PhantomData,
        }
    }

    /// Stops the observer's callback from being run. Calling this more than
    /// once has no further effect.
    pub fn unregister(&self) {
        self.observer.unregister()
    }
}
