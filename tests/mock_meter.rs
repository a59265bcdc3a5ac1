use opentelemetry_metrics_testing::api::metrics::{
    sdk_api::LabelSet, InstrumentKind, Meter, MeterProvider, MetricOptions, ObserverResult,
};
use opentelemetry_metrics_testing::api::{Context, Key, Value};
use opentelemetry_metrics_testing::testing::metric::{MockLabelSet, MockMeter, MockMeterProvider};
use std::any::Any;
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn route(meter: &MockMeter, value: &'static str) -> MockLabelSet {
    meter.labels(&[Key::new("route").string(value)])
}

#[test]
fn counter_add_records_one_batch() {
    init_tracing();
    let provider = MockMeterProvider::new();
    let meter = provider.meter("svc");
    let counter = meter.new_i64_counter("requests", MetricOptions::default());
    let labels = route(&meter, "/x");

    counter.add_with_context(&Context::new(), 5, &labels);

    let batches = meter.measurement_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].measurements.len(), 1);
    let measurement = &batches[0].measurements[0];
    assert_eq!(measurement.to_i64(), 5);
    assert_eq!(measurement.instrument.name(), "requests");
    assert_eq!(measurement.instrument.kind(), &InstrumentKind::Counter);
    assert_eq!(
        batches[0].label_set.get(&Key::new("route")),
        Some(&Value::String("/x".into()))
    );
}

#[test]
fn one_batch_per_call_in_call_order() {
    init_tracing();
    let meter = MockMeter::new("svc");
    let counter = meter.new_i64_counter("requests", MetricOptions::default());
    let gauge = meter.new_i64_gauge("in_flight", MetricOptions::default());
    let labels = route(&meter, "/x");

    counter.add(1, &labels);
    meter.record_batch(
        &labels,
        vec![counter.measurement(2), gauge.measurement(3), counter.measurement(4)],
    );
    gauge.bind(&labels).set(5);

    let batches = meter.measurement_batches();
    let shape: Vec<Vec<i64>> = batches
        .iter()
        .map(|batch| batch.measurements.iter().map(|m| m.to_i64()).collect())
        .collect();
    assert_eq!(shape, vec![vec![1], vec![2, 3, 4], vec![5]]);
}

#[test]
fn all_recording_paths_converge() {
    init_tracing();
    let meter = MockMeter::new("svc");
    let counter = meter.new_f64_counter("bytes", MetricOptions::default());
    let labels = route(&meter, "/upload");

    counter.add(7.0, &labels);
    counter.bind(&labels).add(7.0);
    meter.record_batch(&labels, vec![counter.measurement(7.0)]);

    let batches = meter.measurement_batches();
    assert_eq!(batches.len(), 3);
    let first = &batches[0].measurements[0];
    for batch in &batches {
        assert_eq!(batch.measurements.len(), 1);
        assert!(batch.label_set.ptr_eq(&labels));
        assert!(batch.measurements[0].instrument.ptr_eq(&first.instrument));
        assert_eq!(batch.measurements[0].number, first.number);
    }
}

#[test]
fn provider_returns_one_meter_per_name() {
    let provider = MockMeterProvider::new();
    let meter = provider.meter("x");
    meter.new_i64_counter("c", MetricOptions::default()).add(1, &meter.labels(&[]));

    let again = provider.meter("x");
    assert!(again.ptr_eq(&meter));
    assert_eq!(again.measurement_batches().len(), 1);
    assert!(!provider.meter("y").ptr_eq(&meter));
}

#[test]
fn labels_keep_the_last_duplicate() {
    let meter = MockMeter::new("svc");
    let labels = meter.labels(&[Key::new("k").i64(1), Key::new("k").i64(2)]);
    assert_eq!(labels.get(&Key::new("k")), Some(&Value::I64(2)));
}

#[test]
fn unregistered_observers_are_skipped_in_order() {
    init_tracing();
    let meter = MockMeter::new("svc");
    let calls = Arc::new(Mutex::new(Vec::new()));

    let register = |name: &'static str| {
        let calls = calls.clone();
        meter.register_i64_observer(
            name,
            Some(Box::new(move |_: ObserverResult<i64>| {
                calls.lock().unwrap().push(name)
            })),
            MetricOptions::default(),
        )
    };
    let _before = register("before");
    let middle = register("middle");
    let _after = register("after");

    middle.unregister();
    meter.run_observers();

    assert_eq!(*calls.lock().unwrap(), vec!["before", "after"]);
    let dead: Vec<bool> = meter.observers().iter().map(|o| o.is_dead()).collect();
    assert_eq!(dead, vec![false, true, false]);
}

#[test]
fn observers_record_only_when_polled() {
    init_tracing();
    let meter = MockMeter::new("svc");
    let idle = route(&meter, "/idle");
    let busy = route(&meter, "/busy");
    let _observer = meter.register_f64_observer(
        "utilization",
        Some(Box::new(move |result: ObserverResult<f64>| {
            result.observe(0.1, &idle);
            result.observe(0.9, &busy);
        })),
        MetricOptions::default(),
    );

    assert!(meter.measurement_batches().is_empty());

    meter.run_observers();
    let batches = meter.measurement_batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].measurements[0].to_f64(), 0.1);
    assert_eq!(batches[1].measurements[0].to_f64(), 0.9);
    assert_eq!(
        batches[1].label_set.get(&Key::new("route")),
        Some(&Value::String("/busy".into()))
    );
    assert_eq!(
        batches[0].measurements[0].instrument.kind(),
        &InstrumentKind::Observer
    );

    meter.run_observers();
    assert_eq!(meter.measurement_batches().len(), 4);
}

#[derive(Debug)]
struct Forwarding(MockLabelSet);

impl LabelSet for Forwarding {
    fn delegate(&self) -> Option<&dyn LabelSet> {
        Some(&self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn forwarding_label_sets_resolve_to_the_wrapped_set() {
    let meter = MockMeter::new("svc");
    let measure = meter.new_i64_measure("payload", MetricOptions::default());
    let labels = route(&meter, "/x");

    measure.record(128, &Forwarding(labels.clone()));
    meter.record_batch(&Forwarding(labels.clone()), vec![measure.measurement(256)]);

    let batches = meter.measurement_batches();
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|batch| batch.label_set.ptr_eq(&labels)));
}
