use crate::api::metrics::{
    sdk_api::LabelSet, Counter, Descriptor, Gauge, InstrumentKind, Measure, Measurement, Meter,
    MetricOptions, NumberKind, Observer, ObserverCallback,
};
use crate::api::{Context, KeyValue};
use crate::testing::metric::{
    concrete_instrument, concrete_label_set, observer, Batch, MockInstrument, MockLabelSet,
    MockMeasurement, MockObserver,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// A meter that records everything it is told into an in-memory log.
///
/// `MockMeter` is a handle: clones share the same log and observers, and
/// `ptr_eq` tells whether two handles refer to the same meter.
///
/// The meter owns its observers' callbacks. A callback that captures a
/// `MockMeter` keeps that meter alive forever; capture a label set, or a
/// `WeakMockMeter` from `downgrade`, instead.
#[derive(Clone, Debug)]
pub struct MockMeter(Arc<MeterState>);

/// A non-owning reference to a `MockMeter`.
#[derive(Clone, Debug)]
pub struct WeakMockMeter(Weak<MeterState>);

impl WeakMockMeter {
    /// Returns the meter if any `MockMeter` handle to it is still alive.
    pub fn upgrade(&self) -> Option<MockMeter> {
        self.0.upgrade().map(MockMeter)
    }
}

#[derive(Debug, Default)]
pub(crate) struct MeterState {
    name: String,
    // append-only, in recording order
    batches: Mutex<Vec<Batch>>,
    // includes unregistered observers
    observers: Mutex<Vec<Arc<MockObserver>>>,
}

impl Default for MockMeter {
    fn default() -> Self {
        MockMeter::new("")
    }
}

impl MockMeter {
    /// Create an empty meter. Instruments it creates carry `name` as their
    /// library name.
    pub fn new<T: Into<String>>(name: T) -> Self {
        MockMeter(Arc::new(MeterState {
            name: name.into(),
            ..MeterState::default()
        }))
    }

    pub(crate) fn from_state(state: Arc<MeterState>) -> Self {
        MockMeter(state)
    }

    /// The name this meter was created with.
    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    /// A snapshot of every batch recorded so far, in recording order.
    pub fn measurement_batches(&self) -> Vec<Batch> {
        lock(&self.0.batches).clone()
    }

    /// Every observer registered with this meter, in registration order,
    /// including ones that have been unregistered.
    pub fn observers(&self) -> Vec<Arc<MockObserver>> {
        lock(&self.0.observers).clone()
    }

    /// Returns `true` if both handles refer to the same meter.
    pub fn ptr_eq(&self, other: &MockMeter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Creates a reference that does not keep the meter alive.
    pub fn downgrade(&self) -> WeakMockMeter {
        WeakMockMeter(self.state())
    }

    /// Invokes the callback of every live observer, in registration order.
    ///
    /// Observers registered while this runs are first polled on the next
    /// call.
    pub fn run_observers(&self) {
        for observer in self.observers() {
            if observer.is_dead() {
                tracing::trace!(
                    instrument = observer.instrument().name(),
                    "skipping unregistered observer"
                );
                continue;
            }
            observer.run();
        }
    }

    pub(crate) fn record_mock_batch(
        &self,
        cx: &Context,
        label_set: MockLabelSet,
        measurements: Vec<MockMeasurement>,
    ) {
        lock(&self.0.batches).push(Batch {
            measurements,
            ctx: cx.clone(),
            label_set,
        })
    }

    fn new_instrument(
        &self,
        name: String,
        instrument_kind: InstrumentKind,
        number_kind: NumberKind,
        opts: MetricOptions,
    ) -> MockInstrument {
        tracing::debug!(
            meter = self.name(),
            instrument = name.as_str(),
            kind = ?instrument_kind,
            number_kind = ?number_kind,
            "created instrument"
        );
        MockInstrument::new(Descriptor::new(
            name,
            self.0.name.clone(),
            instrument_kind,
            number_kind,
            opts,
        ))
    }

    fn new_observer(
        &self,
        name: String,
        callback: observer::Callback,
        number_kind: NumberKind,
        opts: MetricOptions,
    ) -> Arc<MockObserver> {
        let instrument = self.new_instrument(name, InstrumentKind::Observer, number_kind, opts);
        let observer = Arc::new(MockObserver::new(instrument, self.state(), callback));
        lock(&self.0.observers).push(observer.clone());
        observer
    }

    fn state(&self) -> Weak<MeterState> {
        Arc::downgrade(&self.0)
    }
}

impl Meter for MockMeter {
    type LabelSet = MockLabelSet;

    fn labels(&self, key_values: &[KeyValue]) -> MockLabelSet {
        MockLabelSet::new(self.state(), key_values)
    }

    fn new_i64_counter<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Counter<i64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Counter, NumberKind::I64, opts);
        Counter::new(Arc::new(instrument))
    }

    fn new_f64_counter<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Counter<f64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Counter, NumberKind::F64, opts);
        Counter::new(Arc::new(instrument))
    }

    fn new_i64_gauge<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Gauge<i64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Gauge, NumberKind::I64, opts);
        Gauge::new(Arc::new(instrument))
    }

    fn new_f64_gauge<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Gauge<f64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Gauge, NumberKind::F64, opts);
        Gauge::new(Arc::new(instrument))
    }

    fn new_i64_measure<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Measure<i64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Measure, NumberKind::I64, opts);
        Measure::new(Arc::new(instrument))
    }

    fn new_f64_measure<S: Into<String>>(&self, name: S, opts: MetricOptions) -> Measure<f64> {
        let instrument =
            self.new_instrument(name.into(), InstrumentKind::Measure, NumberKind::F64, opts);
        Measure::new(Arc::new(instrument))
    }

    fn register_i64_observer<S: Into<String>>(
        &self,
        name: S,
        callback: Option<ObserverCallback<i64>>,
        opts: MetricOptions,
    ) -> Observer<i64> {
        let callback = observer::wrap_i64_observer_callback(callback);
        Observer::new(self.new_observer(name.into(), callback, NumberKind::I64, opts))
    }

    fn register_f64_observer<S: Into<String>>(
        &self,
        name: S,
        callback: Option<ObserverCallback<f64>>,
        opts: MetricOptions,
    ) -> Observer<f64> {
        let callback = observer::wrap_f64_observer_callback(callback);
        Observer::new(self.new_observer(name.into(), callback, NumberKind::F64, opts))
    }

    fn record_batch_with_context<M: IntoIterator<Item = Measurement>>(
        &self,
        cx: &Context,
        labels: &dyn LabelSet,
        measurements: M,
    ) {
        let label_set = concrete_label_set(labels);
        let measurements = measurements
            .into_iter()
            .map(|measurement| MockMeasurement {
                number: *measurement.number(),
                instrument: concrete_instrument(measurement.instrument_impl().as_ref()),
            })
            .collect();
        self.record_mock_batch(cx, label_set, measurements)
    }
}

// Recording keeps going after a panic elsewhere poisoned the lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
