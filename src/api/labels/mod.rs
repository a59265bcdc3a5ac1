//! OpenTelemetry Labels
//!
//! Rendering helpers shared by label set implementations. Encoders see labels
//! in ascending key order, so the same set of labels always encodes to the
//! same string.
mod encoder;
pub use encoder::{default_encoder, DefaultLabelEncoder, Encoder};
