use crate::api::metrics::MeterProvider;
use crate::testing::metric::MockMeter;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Hands out one `MockMeter` per name, creating it on first use.
///
/// Lookups are serialized by a single lock, so concurrent calls for the same
/// name always observe the same meter.
#[derive(Debug, Default)]
pub struct MockMeterProvider {
    registered: Mutex<HashMap<String, MockMeter>>,
}

impl MockMeterProvider {
    /// Create a provider with no meters.
    pub fn new() -> Self {
        MockMeterProvider::default()
    }
}

impl MeterProvider for MockMeterProvider {
    type Meter = MockMeter;

    fn meter(&self, name: &str) -> MockMeter {
        let mut registered = self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(meter) = registered.get(name) {
            return meter.clone();
        }

        tracing::debug!(meter = name, "registering mock meter");
        let meter = MockMeter::new(name);
        registered.insert(name.to_string(), meter.clone());
        meter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn same_name_same_meter() {
        let provider = MockMeterProvider::new();
        let first = provider.meter("x");
        let second = provider.meter("x");
        let other = provider.meter("y");

        assert!(first.ptr_eq(&second));
        assert!(!first.ptr_eq(&other));
        assert_eq!(other.name(), "y");
    }

    #[test]
    fn empty_name_is_a_valid_meter() {
        let provider = MockMeterProvider::new();
        assert!(provider.meter("").ptr_eq(&provider.meter("")));
    }

    #[test]
    fn concurrent_lookups_agree() {
        let provider = Arc::new(MockMeterProvider::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = provider.clone();
                thread::spawn(move || provider.meter("shared"))
            })
            .collect();

        let meters: Vec<MockMeter> = handles
            .into_iter()
            .map(|handle| handle.join().expect("lookup thread panicked"))
            .collect();
        assert!(meters.iter().all(|meter| meter.ptr_eq(&meters[0])));
    }
}
