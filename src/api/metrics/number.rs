use std::fmt;

/// Number represents either an integral or a floating point value. It
/// needs to be accompanied with a source of NumberKind that describes
/// the actual type of the value stored within Number.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Number(u64);

impl Number {
    /// The value as an `i64`, converting from the representation `number_kind`
    /// describes.
    pub fn to_i64(&self, number_kind: &NumberKind) -> i64 {
        match number_kind {
            NumberKind::I64 => self.0 as i64,
            NumberKind::F64 => f64::from_bits(self.0) as i64,
        }
    }

    /// The value as an `f64`, converting from the representation `number_kind`
    /// describes.
    pub fn to_f64(&self, number_kind: &NumberKind) -> f64 {
        match number_kind {
            NumberKind::I64 => (self.0 as i64) as f64,
            NumberKind::F64 => f64::from_bits(self.0),
        }
    }

    /// Renders the value according to `number_kind`.
    pub fn to_debug(&self, number_kind: &NumberKind) -> String {
        match number_kind {
            NumberKind::I64 => self.to_i64(number_kind).to_string(),
            NumberKind::F64 => format!("{:?}", self.to_f64(number_kind)),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({:#018x})", self.0)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number(f.to_bits())
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number(i as u64)
    }
}

/// NumberKind describes the data type of the Number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// A Number that stores `i64` values.
    I64,
    /// A Number that stores `f64` values.
    F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_kind() {
        let int: Number = (-42i64).into();
        assert_eq!(int.to_i64(&NumberKind::I64), -42);
        assert_eq!(int.to_f64(&NumberKind::I64), -42.0);

        let float: Number = 2.75f64.into();
        assert_eq!(float.to_f64(&NumberKind::F64), 2.75);
        assert_eq!(float.to_i64(&NumberKind::F64), 2);
    }

    #[test]
    fn debug_rendering_uses_the_kind() {
        assert_eq!(Number::from(5i64).to_debug(&NumberKind::I64), "5");
        assert_eq!(Number::from(0.5f64).to_debug(&NumberKind::F64), "0.5");
    }
}
