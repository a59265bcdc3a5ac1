//! Gauges express a pre-calculated value that replaces the previous one.
use crate::api::metrics::{
    sdk_api::{self, LabelSet},
    sync_instrument::{BoundSyncInstrument, SyncInstrument},
    Measurement, Number,
};
use crate::api::Context;
use std::sync::Arc;

/// An instrument that records the current value of something.
#[derive(Clone, Debug)]
pub struct Gauge<T>(SyncInstrument<T>);

impl<T> Gauge<T>
where
    T: Into<Number>,
{
    /// Wraps a generic instrument implementation in the typed gauge surface.
    pub fn new(instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        Gauge(SyncInstrument::new(instrument))
    }

    /// Creates a bound instrument for this gauge. The labels are associated with
    /// values recorded via subsequent calls to `set`.
    pub fn bind(&self, labels: &dyn LabelSet) -> BoundGauge<T> {
        BoundGauge(self.0.bind(labels))
    }

    /// Records `value` with the given labels using the current context.
    pub fn set(&self, value: T, labels: &dyn LabelSet) {
        self.set_with_context(&Context::current(), value, labels)
    }

    /// Records `value` with the given labels.
    pub fn set_with_context(&self, cx: &Context, value: T, labels: &dyn LabelSet) {
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

/// Gauge bound to a fixed label set.
#[derive(Debug)]
pub struct BoundGauge<T>(BoundSyncInstrument<T>);

impl<T> BoundGauge<T>
where
    T: Into<Number>,
{
    /// Records `value` with the bound labels using the current context.
    pub fn set(&self, value: T) {
        self.set_with_context(&Context::current(), value)
    }

    /// Records `value` with the bound labels.
    pub fn set_with_context(&self, cx: &Context, value: T) {
        self.0.direct_record(cx, value)
    }

    /// Releases the binding.
    pub fn unbind(self) {
        self.0.unbind()
    }
}
