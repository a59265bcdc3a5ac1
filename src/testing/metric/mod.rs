//! # In-memory recording meter
//!
//! `MockMeter` implements the metrics API without aggregating or exporting
//! anything. Every recording call, whether made through an instrument, a
//! bound instrument, an observer callback or `record_batch`, appends one
//! `Batch` to the meter's log in call order. Tests read the log back with
//! `MockMeter::measurement_batches` and poll observers explicitly with
//! `MockMeter::run_observers`.
//!
//! ```
//! use opentelemetry_metrics_testing::api::metrics::{Meter, MeterProvider, MetricOptions};
//! use opentelemetry_metrics_testing::api::{Context, Key};
//! use opentelemetry_metrics_testing::testing::metric::MockMeterProvider;
//!
//! let provider = MockMeterProvider::new();
//! let meter = provider.meter("svc");
//! let counter = meter.new_i64_counter("requests", MetricOptions::default());
//! let labels = meter.labels(&[Key::new("route").string("/x")]);
//!
//! counter.add_with_context(&Context::new(), 5, &labels);
//!
//! let batches = meter.measurement_batches();
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].measurements[0].instrument.name(), "requests");
//! assert_eq!(batches[0].measurements[0].to_i64(), 5);
//! ```
use crate::api::labels::Encoder;
use crate::api::metrics::{
    sdk_api::{BoundInstrumentImpl, InstrumentImpl, LabelSet},
    Descriptor, InstrumentKind, MetricsError, Number, NumberKind, Result,
};
use crate::api::{Context, Key, KeyValue, Value};
use std::any::Any;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::sync::{Arc, Weak};

mod meter;
mod observer;
mod provider;

pub use meter::{MockMeter, WeakMockMeter};
pub(crate) use meter::MeterState;
pub use observer::MockObserver;
pub use provider::MockMeterProvider;

/// An instrument created by a `MockMeter`.
///
/// Clones share the same descriptor; use `ptr_eq` to test whether two values
/// are the same instrument.
#[derive(Clone, Debug)]
pub struct MockInstrument {
    descriptor: Arc<Descriptor>,
}

impl MockInstrument {
    pub(crate) fn new(descriptor: Descriptor) -> Self {
        MockInstrument {
            descriptor: Arc::new(descriptor),
        }
    }

    /// The instrument's name.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Whether this is a counter, gauge, measure or observer.
    pub fn kind(&self) -> &InstrumentKind {
        self.descriptor.instrument_kind()
    }

    /// The kind of numbers this instrument records.
    pub fn number_kind(&self) -> &NumberKind {
        self.descriptor.number_kind()
    }

    /// Everything the instrument was declared with.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns `true` if both values refer to the same instrument.
    pub fn ptr_eq(&self, other: &MockInstrument) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor)
    }
}

impl InstrumentImpl for MockInstrument {
    fn bind(&self, labels: &dyn LabelSet) -> Arc<dyn BoundInstrumentImpl> {
        Arc::new(MockHandle {
            instrument: self.clone(),
            label_set: concrete_label_set(labels),
        })
    }

    fn record_one_with_context(&self, cx: &Context, number: Number, labels: &dyn LabelSet) {
        let label_set = concrete_label_set(labels);
        record_one(cx, &label_set, self, number)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl TryFrom<&dyn InstrumentImpl> for MockInstrument {
    type Error = MetricsError;

    fn try_from(instrument: &dyn InstrumentImpl) -> Result<Self> {
        instrument
            .as_any()
            .downcast_ref::<MockInstrument>()
            .cloned()
            .ok_or_else(|| MetricsError::UnexpectedInstrument(format!("{:?}", instrument)))
    }
}

/// An immutable label set created by `MockMeter::labels`.
#[derive(Clone, Debug)]
pub struct MockLabelSet {
    meter: Weak<MeterState>,
    labels: Arc<HashMap<Key, Value>>,
}

impl MockLabelSet {
    pub(crate) fn new(meter: Weak<MeterState>, key_values: &[KeyValue]) -> Self {
        let mut labels = HashMap::with_capacity(key_values.len());
        for kv in key_values {
            labels.insert(kv.key.clone(), kv.value.clone());
        }

        MockLabelSet {
            meter,
            labels: Arc::new(labels),
        }
    }

    /// The meter that created this label set, if it is still alive.
    pub fn meter(&self) -> Option<MockMeter> {
        self.meter.upgrade().map(MockMeter::from_state)
    }

    /// All labels in the set.
    pub fn labels(&self) -> &HashMap<Key, Value> {
        &self.labels
    }

    /// The value for `key`, if the set has one.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.labels.get(key)
    }

    /// Number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the set has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Encodes the labels in ascending key order.
    pub fn encoded(&self, encoder: &dyn Encoder) -> String {
        let mut sorted: Vec<KeyValue> = self
            .labels
            .iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));

        encoder.encode(&mut sorted.iter())
    }

    /// Returns `true` if both values refer to the same label set.
    pub fn ptr_eq(&self, other: &MockLabelSet) -> bool {
        Arc::ptr_eq(&self.labels, &other.labels)
    }
}

impl LabelSet for MockLabelSet {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl TryFrom<&dyn LabelSet> for MockLabelSet {
    type Error = MetricsError;

    /// Resolves one level of delegation, then expects a `MockLabelSet`.
    fn try_from(labels: &dyn LabelSet) -> Result<Self> {
        let labels = labels.delegate().unwrap_or(labels);
        labels
            .as_any()
            .downcast_ref::<MockLabelSet>()
            .cloned()
            .ok_or_else(|| MetricsError::UnexpectedLabelSet(format!("{:?}", labels)))
    }
}

/// An instrument bound to a label set.
#[derive(Clone, Debug)]
pub struct MockHandle {
    instrument: MockInstrument,
    label_set: MockLabelSet,
}

impl MockHandle {
    /// The bound instrument.
    pub fn instrument(&self) -> &MockInstrument {
        &self.instrument
    }

    /// The bound label set.
    pub fn label_set(&self) -> &MockLabelSet {
        &self.label_set
    }
}

impl BoundInstrumentImpl for MockHandle {
    fn record_one_with_context(&self, cx: &Context, number: Number) {
        record_one(cx, &self.label_set, &self.instrument, number)
    }

    fn unbind(&self) {}
}

/// One recording event.
#[derive(Clone, Debug)]
pub struct Batch {
    /// The values recorded, in the order they were given.
    pub measurements: Vec<MockMeasurement>,
    /// The context active when the values were recorded.
    pub ctx: Context,
    /// The labels the values were recorded with.
    pub label_set: MockLabelSet,
}

/// One recorded value.
#[derive(Clone, Debug)]
pub struct MockMeasurement {
    /// The raw value; interpret it with the instrument's number kind.
    pub number: Number,
    /// The instrument the value was recorded against.
    pub instrument: MockInstrument,
}

impl MockMeasurement {
    /// The value as an `i64`, according to the instrument's number kind.
    pub fn to_i64(&self) -> i64 {
        self.number.to_i64(self.instrument.number_kind())
    }

    /// The value as an `f64`, according to the instrument's number kind.
    pub fn to_f64(&self) -> f64 {
        self.number.to_f64(self.instrument.number_kind())
    }
}

// A label set or instrument from another implementation is a wiring bug in
// the code under test, so it fails loudly instead of being dropped.
pub(crate) fn concrete_label_set(labels: &dyn LabelSet) -> MockLabelSet {
    MockLabelSet::try_from(labels).unwrap_or_else(|err| panic!("{}", err))
}

pub(crate) fn concrete_instrument(instrument: &dyn InstrumentImpl) -> MockInstrument {
    MockInstrument::try_from(instrument).unwrap_or_else(|err| panic!("{}", err))
}

/// Appends a single-measurement batch to the meter that created `label_set`.
fn record_one(cx: &Context, label_set: &MockLabelSet, instrument: &MockInstrument, number: Number) {
    match label_set.meter() {
        Some(meter) => meter.record_mock_batch(
            cx,
            label_set.clone(),
            vec![MockMeasurement {
                number,
                instrument: instrument.clone(),
            }],
        ),
        None => tracing::warn!(
            instrument = instrument.name(),
            "label set outlived its meter, measurement dropped"
        ),
    }
}
