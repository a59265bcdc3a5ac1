use crate::api::KeyValue;
use std::fmt;

/// Encoder is a mechanism for serializing a label set into a specific string
/// representation.
pub trait Encoder: fmt::Debug {
    /// Encode returns the serialized encoding of the label set using its
    /// iterator, in ascending key order.
    fn encode(&self, labels: &mut dyn Iterator<Item = &KeyValue>) -> String;
}

/// Encodes labels as a comma separated list of `key=value` pairs.
#[derive(Debug)]
pub struct DefaultLabelEncoder;

impl Encoder for DefaultLabelEncoder {
    fn encode(&self, labels: &mut dyn Iterator<Item = &KeyValue>) -> String {
        labels
            .enumerate()
            .fold(String::new(), |mut acc, (idx, kv)| {
                if idx > 0 {
                    acc.push(',')
                }
                acc.push_str(kv.key.as_str());
                acc.push('=');
                acc.push_str(String::from(&kv.value).as_str());
                acc
            })
    }
}

/// Returns the `DefaultLabelEncoder` boxed for storage.
pub fn default_encoder() -> Box<dyn Encoder + Send + Sync> {
    Box::new(DefaultLabelEncoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Key;

    #[test]
    fn default_encoder_joins_pairs() {
        let labels = vec![Key::new("a").i64(1), Key::new("b").string("x")];
        let encoded = default_encoder().encode(&mut labels.iter());
        assert_eq!(encoded, "a=1,b=x");
    }

    #[test]
    fn empty_labels_encode_to_empty_string() {
        assert_eq!(DefaultLabelEncoder.encode(&mut std::iter::empty()), "");
    }
}
