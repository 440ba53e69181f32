//! Values stored in a [`MessageRecord`](crate::MessageRecord).

/// Field value types.
///
/// Numeric fields (`channel`, `note`, `pitch`, ...) are `Int`, sysex `data`
/// is `Bytes`, `type` is `Str`. `time` starts as `Int(0)` but callers may
/// set any variant; nothing is range-checked here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Str(String),
}

impl FieldValue {
    /// Convert to i64 if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Convert to f64 if possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        Self::Float(f as f64)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(b: [u8; N]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversion() {
        let val = FieldValue::from(60u8);
        assert_eq!(val, FieldValue::Int(60));
        assert_eq!(val.as_i64(), Some(60));
        assert_eq!(val.as_f64(), Some(60.0));
        assert_eq!(val.as_bytes(), None);

        let val = FieldValue::from(-8192i16);
        assert_eq!(val.as_i64(), Some(-8192));

        let val = FieldValue::from(0.5);
        assert_eq!(val.as_f64(), Some(0.5));
        assert_eq!(val.as_i64(), None);

        let val = FieldValue::from([1u8, 2, 3]);
        assert_eq!(val.as_bytes(), Some(&[1u8, 2, 3][..]));

        let val = FieldValue::from("note_on");
        assert_eq!(val.as_str(), Some("note_on"));
    }
}
