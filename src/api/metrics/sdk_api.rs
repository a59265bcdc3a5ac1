//! Metrics SDK API
//!
//! The implementation-level capabilities a meter implementation supplies. The
//! typed instruments in this crate are thin wrappers that translate typed
//! calls into these generic, `Number`-based calls.
use crate::api::metrics::Number;
use crate::api::Context;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A label set produced by a meter implementation.
pub trait LabelSet: fmt::Debug {
    /// The label set this one forwards to, if it is a forwarding wrapper.
    ///
    /// Implementations resolve at most one level of delegation.
    fn delegate(&self) -> Option<&dyn LabelSet> {
        None
    }

    /// Returns self as any
    fn as_any(&self) -> &dyn Any;
}

/// The implementation-level interface to a generic synchronous instrument
/// (counters, gauges and measures).
pub trait InstrumentImpl: fmt::Debug + Send + Sync {
    /// Creates an implementation-level bound instrument, binding a label set
    /// with this instrument implementation.
    fn bind(&self, labels: &dyn LabelSet) -> Arc<dyn BoundInstrumentImpl>;

    /// Capture a single metric event with the current context.
    fn record_one(&self, number: Number, labels: &dyn LabelSet) {
        self.record_one_with_context(&Context::current(), number, labels)
    }

    /// Capture a single metric event.
    fn record_one_with_context(&self, cx: &Context, number: Number, labels: &dyn LabelSet);

    /// Returns self as any
    fn as_any(&self) -> &dyn Any;
}

/// The implementation-level interface to a generic bound instrument.
pub trait BoundInstrumentImpl: fmt::Debug + Send + Sync {
    /// Capture a single metric event with the current context.
    fn record_one(&self, number: Number) {
        self.record_one_with_context(&Context::current(), number)
    }

    /// Capture a single metric event.
    fn record_one_with_context(&self, cx: &Context, number: Number);

    /// Releases whatever the implementation holds for this binding.
    fn unbind(&self);
}

/// The implementation-level interface to a registered observer.
pub trait ObserverImpl: fmt::Debug + Send + Sync {
    /// Stops the observer's callback from being run.
    fn unregister(&self);
}
