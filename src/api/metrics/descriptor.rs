use crate::api::metrics::{InstrumentKind, MetricOptions, NumberKind};
use crate::api::{Key, Unit};

/// Descriptor contains all the settings that describe an instrument, including
/// its name, metric kind, number kind, and the configurable options.
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct Descriptor {
    name: String,
    instrument_kind: InstrumentKind,
    number_kind: NumberKind,
    options: MetricOptions,
    alternate: bool,
    library_name: String,
}

impl Descriptor {
    /// Create a new descriptor, resolving `options` for `instrument_kind`.
    pub fn new(
        name: String,
        library_name: String,
        instrument_kind: InstrumentKind,
        number_kind: NumberKind,
        options: MetricOptions,
    ) -> Self {
        let alternate = options.alternate_for(&instrument_kind);
        Descriptor {
            name,
            instrument_kind,
            number_kind,
            options,
            alternate,
            library_name,
        }
    }

    /// The metric instrument's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The specific kind of instrument.
    pub fn instrument_kind(&self) -> &InstrumentKind {
        &self.instrument_kind
    }

    /// NumberKind returns whether this instrument is declared over int64 or
    /// float64 values.
    pub fn number_kind(&self) -> &NumberKind {
        &self.number_kind
    }

    /// The options the instrument was created with.
    pub fn options(&self) -> &MetricOptions {
        &self.options
    }

    /// A human-readable description of the metric instrument.
    pub fn description(&self) -> Option<&String> {
        self.options.description()
    }

    /// Unit describes the units of the metric instrument.
    pub fn unit(&self) -> Option<&str> {
        self.options.unit().map(Unit::as_str)
    }

    /// The recommended label keys.
    pub fn keys(&self) -> &[Key] {
        self.options.keys()
    }

    /// Whether the instrument departs from its kind's default: a non-monotonic
    /// counter, a monotonic gauge or observer, or a non-absolute measure.
    pub fn alternate(&self) -> bool {
        self.alternate
    }

    /// LibraryName returns the metric instrument's library name, typically
    /// given via a call to `MeterProvider::meter`.
    pub fn library_name(&self) -> &str {
        self.library_name.as_str()
    }
}
