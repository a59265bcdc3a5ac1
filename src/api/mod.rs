//! # OpenTelemetry API
//!
//! The subset of the OpenTelemetry API that metrics instrumentation is written
//! against: shared key/value types, context propagation, label encoding and
//! the metrics instrument surface.
pub mod context;
pub mod core;
pub mod labels;
pub mod metrics;

pub use self::context::{Context, ContextGuard};
pub use self::core::{Key, KeyValue, Unit, Value};
