//! An in-memory recording double for the OpenTelemetry metrics API.
//!
//! The `api` module holds the instrumentation surface: typed counters,
//! gauges, measures and observers, and the implementation-level traits a
//! meter implementation supplies behind them. The `testing::metric` module
//! implements those traits with a meter that records nothing anywhere but in
//! memory, so tests can assert exactly what instrumented code recorded.
//!
//! ```
//! use opentelemetry_metrics_testing::api::metrics::{Meter, MeterProvider, MetricOptions};
//! use opentelemetry_metrics_testing::api::Key;
//! use opentelemetry_metrics_testing::testing::metric::MockMeterProvider;
//!
//! let provider = MockMeterProvider::new();
//! let meter = provider.meter("checkout");
//! let orders = meter.new_f64_counter("orders", MetricOptions::default());
//! let labels = meter.labels(&[Key::new("currency").string("EUR")]);
//!
//! let bound = orders.bind(&labels);
//! bound.add(12.5);
//! bound.add(3.0);
//!
//! let recorded: Vec<f64> = meter
//!     .measurement_batches()
//!     .iter()
//!     .map(|batch| batch.measurements[0].to_f64())
//!     .collect();
//! assert_eq!(recorded, vec![12.5, 3.0]);
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]

pub mod api;
pub mod testing;
