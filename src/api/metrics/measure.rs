//! Measures capture individual values whose distribution is of interest.
use crate::api::metrics::{
    sdk_api::{self, LabelSet},
    sync_instrument::{BoundSyncInstrument, SyncInstrument},
    Measurement, Number,
};
use crate::api::Context;
use std::sync::Arc;

/// An instrument that records a distribution of individual values.
#[derive(Clone, Debug)]
pub struct Measure<T>(SyncInstrument<T>);

impl<T> Measure<T>
where
    T: Into<Number>,
{
    /// Wraps a generic instrument implementation in the typed measure surface.
    pub fn new(instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        Measure(SyncInstrument::new(instrument))
    }

    /// Creates a bound instrument for this measure. The labels are associated with
    /// values recorded via subsequent calls to `record`.
    pub fn bind(&self, labels: &dyn LabelSet) -> BoundMeasure<T> {
        BoundMeasure(self.0.bind(labels))
    }

    /// Records `value` with the given labels using the current context.
    pub fn record(&self, value: T, labels: &dyn LabelSet) {
        self.record_with_context(&Context::current(), value, labels)
    }

    /// Records `value` with the given labels.
    pub fn record_with_context(&self, cx: &Context, value: T, labels: &dyn LabelSet) {
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

/// Measure bound to a fixed label set.
#[derive(Debug)]
pub struct BoundMeasure<T>(BoundSyncInstrument<T>);

impl<T> BoundMeasure<T>
where
    T: Into<Number>,
{
    /// Records `value` with the bound labels using the current context.
    pub fn record(&self, value: T) {
        self.record_with_context(&Context::current(), value)
    }

    /// Records `value` with the bound labels.
    pub fn record_with_context(&self, cx: &Context, value: T) {
        self.0.direct_record(cx, value)
    }

    /// Releases the binding.
    pub fn unbind(self) {
        self.0.unbind()
    }
}
