use core::fmt;
use core::str::FromStr;
use strum::EnumString;

/// The type a metric's output is declared to have in the setfile.
///
/// Unknown tags are preserved in [`ValueType::Unsupported`] so they can be
/// reported; values of that type are kept as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum ValueType {
    #[strum(serialize = "float64")]
    Float64,
    #[strum(serialize = "float32")]
    Float32,
    #[strum(serialize = "int64")]
    Int64,
    #[strum(serialize = "int32")]
    Int32,
    #[strum(serialize = "int16")]
    Int16,
    #[strum(serialize = "int8")]
    Int8,
    #[strum(serialize = "uint64")]
    Uint64,
    #[strum(serialize = "uint32")]
    Uint32,
    #[strum(serialize = "uint16")]
    Uint16,
    #[strum(serialize = "uint8")]
    Uint8,
    #[strum(serialize = "string")]
    String,
    #[strum(default)]
    Unsupported(String),
}

impl ValueType {
    /// Parse a type tag. Never fails: unknown tags become [`ValueType::Unsupported`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or_else(|_| Self::Unsupported(tag.to_string()))
    }

    /// The tag as written in a setfile.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Float64 => "float64",
            Self::Float32 => "float32",
            Self::Int64 => "int64",
            Self::Int32 => "int32",
            Self::Int16 => "int16",
            Self::Int8 => "int8",
            Self::Uint64 => "uint64",
            Self::Uint32 => "uint32",
            Self::Uint16 => "uint16",
            Self::Uint8 => "uint8",
            Self::String => "string",
            Self::Unsupported(tag) => tag,
        }
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
