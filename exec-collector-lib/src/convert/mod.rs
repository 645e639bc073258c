//! Conversion of raw program output into typed metric values
//!
//! Every metric in a setfile declares a type tag. [`ValueType`] is the parsed
//! form of that tag, [`TypedValue`] holds a decoded value, and [`convert`] is
//! the pure function joining them.
//!
//! Numeric tags are parsed strictly in base 10 at the width and signedness the
//! tag names, without trimming whitespace. The `string` tag passes the output
//! through unchanged, and unknown tags degrade to strings with a warning.

mod converter;
mod typed_value;
mod value_type;

pub use converter::convert;
pub use typed_value::TypedValue;
pub use value_type::ValueType;
