use crate::api::metrics::{sdk_api, Number};
use crate::api::Context;
use std::marker;
use std::sync::Arc;

/// A single value paired with the instrument it is recorded against, used
/// with `Meter::record_batch`.
#[derive(Clone, Debug)]
pub struct Measurement {
    number: Number,
    instrument: Arc<dyn sdk_api::InstrumentImpl>,
}

impl Measurement {
    /// Create a new measurement
    pub fn new(number: Number, instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        Measurement { number, instrument }
    }

    /// The value of this measurement
    pub fn number(&self) -> &Number {
        &self.number
    }

    /// The instrument implementation this measurement belongs to
    pub fn instrument_impl(&self) -> &Arc<dyn sdk_api::InstrumentImpl> {
        &self.instrument
    }
}

/// Wrapper around an implementation-level instrument for a given type
#[derive(Debug)]
pub(crate) struct SyncInstrument<T> {
    instrument: Arc<dyn sdk_api::InstrumentImpl>,
    _marker: marker::PhantomData<T>,
}

impl<T> Clone for SyncInstrument<T> {
    fn clone(&self) -> Self {
        SyncInstrument {
            instrument: self.instrument.clone(),
            _marker: marker::PhantomData,
        }
    }
}

impl<T: Into<Number>> SyncInstrument<T> {
    /// Create a new sync instrument from an implementation-level instrument
    pub(crate) fn new(instrument: Arc<dyn sdk_api::InstrumentImpl>) -> Self {
        SyncInstrument {
            instrument,
            _marker: marker::PhantomData,
        }
    }

    /// Create a new bound sync instrument
    pub(crate) fn bind(&self, labels: &dyn sdk_api::LabelSet) -> BoundSyncInstrument<T> {
        BoundSyncInstrument {
            bound_instrument: self.instrument.bind(labels),
            _marker: marker::PhantomData,
        }
    }

    /// Record a value directly to the underlying instrument
    pub(crate) fn direct_record(&self, cx: &Context, value: T, labels: &dyn sdk_api::LabelSet) {
        self.instrument
            .record_one_with_context(cx, value.into(), labels)
    }

    /// Pair a value with this instrument for batch recording
    pub(crate) fn measurement(&self, value: T) -> Measurement {
        Measurement::new(value.into(), self.instrument.clone())
    }

    /// Reference to the underlying implementation-level instrument
    pub(crate) fn instrument(&self) -> &Arc<dyn sdk_api::InstrumentImpl> {
        &self.instrument
    }
}

/// Wrapper around an implementation-level bound instrument
#[derive(Debug)]
pub(crate) struct BoundSyncInstrument<T> {
    bound_instrument: Arc<dyn sdk_api::BoundInstrumentImpl>,
    _marker: marker::PhantomData<T>,
}

impl<T: Into<Number>> BoundSyncInstrument<T> {
    /// Record a value directly to the underlying bound instrument
    pub(crate) fn direct_record(&self, cx: &Context, value: T) {
        self.bound_instrument
            .record_one_with_context(cx, value.into())
    }

    /// Release the binding
    pub(crate) fn unbind(self) {
        self.bound_instrument.unbind()
    }
}
