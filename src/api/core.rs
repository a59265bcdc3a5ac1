//! OpenTelemetry shared core data types
use std::borrow::Cow;
use std::fmt;

/// Key used for metric label sets.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// Create a new `Key`.
    pub fn new<S: Into<Cow<'static, str>>>(value: S) -> Self {
        Key(value.into())
    }

    /// Create a `KeyValue` pair for `bool` values.
    pub fn bool<T: Into<bool>>(&self, value: T) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::Bool(value.into()),
        }
    }

    /// Create a `KeyValue` pair for `i64` values.
    pub fn i64(&self, value: i64) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::I64(value),
        }
    }

    /// Create a `KeyValue` pair for `u64` values.
    pub fn u64(&self, value: u64) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::U64(value),
        }
    }

    /// Create a `KeyValue` pair for `f64` values.
    pub fn f64(&self, value: f64) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::F64(value),
        }
    }

    /// Create a `KeyValue` pair for string-like values.
    pub fn string<S: Into<Cow<'static, str>>>(&self, value: S) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::String(value.into()),
        }
    }

    /// Create a `KeyValue` pair for byte arrays.
    pub fn bytes<T: Into<Vec<u8>>>(&self, value: T) -> KeyValue {
        KeyValue {
            key: self.clone(),
            value: Value::Bytes(value.into()),
        }
    }

    /// Returns a reference to the underlying key name
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<&'static str> for Key {
    fn from(key_str: &'static str) -> Self {
        Key(Cow::Borrowed(key_str))
    }
}

impl From<String> for Key {
    fn from(string: String) -> Self {
        Key(Cow::Owned(string))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Possible label values.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// bool values
    Bool(bool),
    /// i64 values
    I64(i64),
    /// u64 values
    U64(u64),
    /// f64 values
    F64(f64),
    /// String values
    String(Cow<'static, str>),
    /// Byte array values
    Bytes(Vec<u8>),
}

macro_rules! from_values {
   (
        $(
            ($t:ty, $val:expr);
        )+
    ) => {
        $(
            impl From<$t> for Value {
                fn from(t: $t) -> Self {
                    $val(t)
                }
            }
        )+
    }
}

from_values!(
    (bool, Value::Bool);
    (i64, Value::I64);
    (u64, Value::U64);
    (f64, Value::F64);
    (Vec<u8>, Value::Bytes);
);

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<&Value> for String {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(value) => value.to_string(),
            Value::I64(value) => value.to_string(),
            Value::U64(value) => value.to_string(),
            Value::F64(value) => value.to_string(),
            Value::String(value) => value.to_string(),
            Value::Bytes(value) => String::from_utf8_lossy(value).into_owned(),
        }
    }
}

/// `KeyValue` pairs are used by label sets.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    /// Dimension or event key
    pub key: Key,
    /// Dimension or event value
    pub value: Value,
}

impl KeyValue {
    /// Create a new `KeyValue` pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Units denote underlying data units tracked by instruments.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Unit(Cow<'static, str>);

impl Unit {
    /// Create a new named unit
    pub fn new<S: Into<Cow<'static, str>>>(value: S) -> Self {
        Unit(value.into())
    }

    /// View the unit as a `&str`
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl AsRef<str> for Unit {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_helpers_build_typed_values() {
        let key = Key::new("route");
        assert_eq!(key.string("/x").value, Value::String("/x".into()));
        assert_eq!(key.i64(-3).value, Value::I64(-3));
        assert_eq!(key.bool(true).value, Value::Bool(true));
        assert_eq!(key.string("/x").key.as_str(), "route");
    }

    #[test]
    fn key_value_new_converts_both_sides() {
        let kv = KeyValue::new("service", "checkout");
        assert_eq!(kv.key, Key::new("service"));
        assert_eq!(kv.value, Value::String("checkout".into()));

        let kv = KeyValue::new(Key::new("attempt"), 3i64);
        assert_eq!(kv.key.as_str(), "attempt");
        assert_eq!(kv.value, Value::I64(3));
    }

    #[test]
    fn values_render_as_strings() {
        assert_eq!(String::from(&Value::F64(1.5)), "1.5");
        assert_eq!(String::from(&Value::Bytes(b"abc".to_vec())), "abc");
        assert_eq!(String::from(&Value::from("svc")), "svc");
    }
}
