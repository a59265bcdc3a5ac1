//! Counters accumulate a sum of the values they are given.
use crate::api::metrics::{
    sdk_api::{self, LabelSet},
    sync_instrument::{BoundSyncInstrument, SyncInstrument},
    Measurement, Number,
};
use crate::api::Context;
use std::sync::Arc;

/// An instrument that records increasing values.
#[derive(Clone, Debug)]
pub struct Counter<T>(SyncInstrument<T>);

impl<T> Counter<T>
where
    T: Into<Number>,
{
    /// Wraps a generic instrument implementation in the typed counter surface.
    pub fn new(instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        Counter(SyncInstrument::new(instrument))
    }

    /// Creates a bound instrument for this counter. The labels are associated with
    /// values recorded via subsequent calls to `add`.
    pub fn bind(&self, labels: &dyn LabelSet) -> BoundCounter<T> {
        BoundCounter(self.0.bind(labels))
    }

    /// Records `value` with the given labels using the current context.
    pub fn add(&self, value: T, labels: &dyn LabelSet) {
        self.add_with_context(&Context::current(), value, labels)
    }

    /// Records `value` with the given labels.
    pub fn add_with_context(&self, cx: &Context, value: T, labels: &dyn LabelSet) {
        self.0.direct_record(cx, value, labels)
    }

    /// Creates a `Measurement` for use with batch recording.
    pub fn measurement(&self, value: T) -> Measurement {
        self.0.measurement(value)
    }

    /// The underlying instrument implementation.
    pub fn instrument(&self) -> &Arc<dyn sdk_api::InstrumentImpl> {
        self.0.instrument()
    }
}

/// Counter bound to a fixed label set.
#[derive(Debug)]
pub struct BoundCounter<T>(BoundSyncInstrument<T>);

impl<T> BoundCounter<T>
where
    T: Into<Number>,
{
    /// Records `value` with the bound labels using the current context.
    pub fn add(&self, value: T) {
        self.add_with_context(&Context::current(), value)
    }

    /// Records `value` with the bound labels.
    pub fn add_with_context(&self, cx: &Context, value: T) {
        self.0.direct_record(cx, value)
    }

    /// Releases the binding.
    pub fn unbind(self) {
        self.0.unbind()
    }
}
