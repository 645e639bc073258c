use super::ValueType;
use core::fmt;

/// A metric value decoded according to its declared [`ValueType`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Float64(f64),
    Float32(f32),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    Uint64(u64),
    Uint32(u32),
    Uint16(u16),
    Uint8(u8),
    String(String),
}

impl TypedValue {
    /// The value type this value carries. Strings report [`ValueType::String`]
    /// even when they came from an unsupported tag.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Float64(_) => ValueType::Float64,
            Self::Float32(_) => ValueType::Float32,
            Self::Int64(_) => ValueType::Int64,
            Self::Int32(_) => ValueType::Int32,
            Self::Int16(_) => ValueType::Int16,
            Self::Int8(_) => ValueType::Int8,
            Self::Uint64(_) => ValueType::Uint64,
            Self::Uint32(_) => ValueType::Uint32,
            Self::Uint16(_) => ValueType::Uint16,
            Self::Uint8(_) => ValueType::Uint8,
            Self::String(_) => ValueType::String,
        }
    }

    /// Convert to a JSON value for reports.
    ///
    /// JSON has no representation for infinities or NaN, so non-finite floats
    /// are written as the strings `inf`, `-inf` and `NaN`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Self::Float64(v) if !v.is_finite() => json!(v.to_string()),
            Self::Float32(v) if !v.is_finite() => json!(v.to_string()),
            Self::Float64(v) => json!(v),
            Self::Float32(v) => json!(v),
            Self::Int64(v) => json!(v),
            Self::Int32(v) => json!(v),
            Self::Int16(v) => json!(v),
            Self::Int8(v) => json!(v),
            Self::Uint64(v) => json!(v),
            Self::Uint32(v) => json!(v),
            Self::Uint16(v) => json!(v),
            Self::Uint8(v) => json!(v),
            Self::String(v) => json!(v),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}
