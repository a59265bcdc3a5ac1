//! Test doubles for the OpenTelemetry API.
pub mod metric;
