use crate::api::metrics::InstrumentKind;
use crate::api::{Key, Unit};

/// Options supplied when creating an instrument.
///
/// `with_monotonic` applies to counters, gauges and observers, `with_absolute`
/// to measures. Whichever does not apply to the instrument being created is
/// ignored when the options are resolved into a `Descriptor`.
#[derive(Clone, Debug, Default, PartialEq, Hash)]
pub struct MetricOptions {
    pub(crate) description: Option<String>,
    pub(crate) unit: Option<Unit>,
    pub(crate) keys: Vec<Key>,
    pub(crate) monotonic: Option<bool>,
    pub(crate) absolute: Option<bool>,
}

impl MetricOptions {
    /// Set a human readable description of the instrument.
    pub fn with_description<S: Into<String>>(self, description: S) -> Self {
        MetricOptions {
            description: Some(description.into()),
            ..self
        }
    }

    /// Set the unit the instrument records in.
    pub fn with_unit(self, unit: Unit) -> Self {
        MetricOptions {
            unit: Some(unit),
            ..self
        }
    }

    /// Set the recommended label keys for the instrument.
    pub fn with_keys(self, keys: Vec<Key>) -> Self {
        MetricOptions { keys, ..self }
    }

    /// Counters are monotonic unless this is set to `false`; gauges and
    /// observers are non-monotonic unless this is set to `true`.
    pub fn with_monotonic(self, monotonic: bool) -> Self {
        MetricOptions {
            monotonic: Some(monotonic),
            ..self
        }
    }

    /// Measures only accept non-negative values unless this is set to `false`.
    pub fn with_absolute(self, absolute: bool) -> Self {
        MetricOptions {
            absolute: Some(absolute),
            ..self
        }
    }

    /// The configured description, if any.
    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    /// The configured unit, if any.
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// The recommended label keys.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Whether the instrument departs from its kind's default behaviour.
    ///
    /// The default is monotonic for counters, non-monotonic for gauges and
    /// observers, and absolute for measures.
    pub(crate) fn alternate_for(&self, instrument_kind: &InstrumentKind) -> bool {
        match instrument_kind {
            InstrumentKind::Counter => self.monotonic == Some(false),
            InstrumentKind::Gauge | InstrumentKind::Observer => self.monotonic == Some(true),
            InstrumentKind::Measure => self.absolute == Some(false),
        }
    }
}
