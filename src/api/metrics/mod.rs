//! # OpenTelemetry Metrics API
use std::fmt;
use std::result;
use thiserror::Error;

mod config;
mod counter;
mod descriptor;
mod gauge;
mod measure;
mod meter;
mod number;
mod observer;
pub mod sdk_api;
mod sync_instrument;

pub use config::MetricOptions;
pub use counter::{BoundCounter, Counter};
pub use descriptor::Descriptor;
pub use gauge::{BoundGauge, Gauge};
pub use measure::{BoundMeasure, Measure};
pub use meter::Meter;
pub use number::{Number, NumberKind};
pub use observer::{AnyObserverResult, Observer, ObserverCallback, ObserverResult};
pub use sync_instrument::Measurement;

/// A specialized `Result` type for metric operations.
pub type Result<T> = result::Result<T, MetricsError>;

/// Errors returned by the metrics API.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A label set was not produced by the meter implementation using it.
    #[error("label set of unexpected type: {0}")]
    UnexpectedLabelSet(String),
    /// An instrument was not produced by the meter implementation using it.
    #[error("instrument of unexpected type: {0}")]
    UnexpectedInstrument(String),
}

/// MeterProvider supports creating named `Meter` instances.
pub trait MeterProvider: fmt::Debug {
    /// The `Meter` type handed out by this provider.
    type Meter: Meter;

    /// Returns the meter registered under `name`.
    fn meter(&self, name: &str) -> Self::Meter;
}

/// The kind of an instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// A synchronous instrument that records increasing values.
    Counter,
    /// A synchronous instrument that records a current value.
    Gauge,
    /// A synchronous instrument that records a distribution of values.
    Measure,
    /// An asynchronous instrument whose values come from a callback.
    Observer,
}
