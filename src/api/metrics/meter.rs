//! # OpenTelemetry Meter API
use crate::api::metrics::{
    sdk_api::LabelSet, Counter, Gauge, Measure, Measurement, MetricOptions, Observer,
    ObserverCallback,
};
use crate::api::{Context, KeyValue};

/// Meter is the interface instrumentation uses to create instruments and
/// record measurements.
///
/// There are six constructors for synchronous instruments, one for each of the
/// three kinds of instrument (counter, gauge, measure) over either integer or
/// floating point inputs, and two for registering observers, whose values are
/// produced by a callback when the implementation collects.
///
/// Instruments are considered permanent for the lifetime of a meter; there is
/// no method to delete them. Names are not required to be unique.
pub trait Meter {
    /// The `LabelSet` data type for this meter.
    type LabelSet: LabelSet;

    /// Returns a label set built from the given key values. A key that
    /// appears more than once takes the last value given for it.
    fn labels(&self, key_values: &[KeyValue]) -> Self::LabelSet;

    /// Creates a new `i64` counter with a given name and customized with passed options.
    fn new_i64_counter<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Counter<i64>;

    /// Creates a new `f64` counter with a given name and customized with passed options.
    fn new_f64_counter<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Counter<f64>;

    /// Creates a new `i64` gauge with a given name and customized with passed options.
    fn new_i64_gauge<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Gauge<i64>;

    /// Creates a new `f64` gauge with a given name and customized with passed options.
    fn new_f64_gauge<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Gauge<f64>;

    /// Creates a new `i64` measure with a given name and customized with passed options.
    fn new_i64_measure<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Measure<i64>;

    /// Creates a new `f64` measure with a given name and customized with passed options.
    fn new_f64_measure<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Measure<f64>;

    /// Registers an `i64` observer whose callback reports values on collection.
    /// A `None` callback observes nothing.
    fn register_i64_observer<S: Into<String>>(
        &self,
        name: S,
        callback: Option<ObserverCallback<i64>>,
        opts: MetricOptions,
    ) -> Observer<i64>;

    /// Registers an `f64` observer whose callback reports values on collection.
    /// A `None` callback observes nothing.
    fn register_f64_observer<S: Into<String>>(
        &self,
        name: S,
        callback: Option<ObserverCallback<f64>>,
        opts: MetricOptions,
    ) -> Observer<f64>;

    /// Atomically records a batch of measurements with the current context.
    fn record_batch<M: IntoIterator<Item = Measurement>>(
        &self,
        labels: &dyn LabelSet,
        measurements: M,
    ) {
        self.record_batch_with_context(&Context::current(), labels, measurements)
    }

    /// Atomically records a batch of measurements.
    fn record_batch_with_context<M: IntoIterator<Item = Measurement>>(
        &self,
        cx: &Context,
        labels: &dyn LabelSet,
        measurements: M,
    );
}
