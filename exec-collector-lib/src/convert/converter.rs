use super::{TypedValue, ValueType};
use crate::error::CollectError;
use core::str::FromStr;

const LOG_TARGET: &str = "   convert";

/// Convert raw program output into a value of the declared type.
///
/// The bytes are decoded as UTF-8 (invalid sequences are replaced) and are not
/// trimmed, so trailing newlines make numeric conversions fail. Strings and
/// unsupported tags always succeed; unsupported tags log a warning.
pub fn convert(raw: &[u8], value_type: &ValueType) -> Result<TypedValue, CollectError> {
    let text = String::from_utf8_lossy(raw);

    match value_type {
        ValueType::Float64 => parse_float::<f64>(&text, value_type).map(TypedValue::Float64),
        ValueType::Float32 => parse_float::<f32>(&text, value_type).map(TypedValue::Float32),
        ValueType::Int64 => parse_int::<i64>(&text, value_type).map(TypedValue::Int64),
        ValueType::Int32 => parse_int::<i32>(&text, value_type).map(TypedValue::Int32),
        ValueType::Int16 => parse_int::<i16>(&text, value_type).map(TypedValue::Int16),
        ValueType::Int8 => parse_int::<i8>(&text, value_type).map(TypedValue::Int8),
        ValueType::Uint64 => parse_uint::<u64>(&text, value_type).map(TypedValue::Uint64),
        ValueType::Uint32 => parse_uint::<u32>(&text, value_type).map(TypedValue::Uint32),
        ValueType::Uint16 => parse_uint::<u16>(&text, value_type).map(TypedValue::Uint16),
        ValueType::Uint8 => parse_uint::<u8>(&text, value_type).map(TypedValue::Uint8),
        ValueType::String => Ok(TypedValue::String(text.into_owned())),
        ValueType::Unsupported(tag) => {
            let warning = CollectError::UnsupportedType { value_type: tag.clone() };
            log::warn!(target: LOG_TARGET, "{warning} (kind={}, data={text:?})", warning.kind());
            Ok(TypedValue::String(text.into_owned()))
        }
    }
}

fn conversion_error(text: &str, value_type: &ValueType, reason: impl ToString) -> CollectError {
    CollectError::Conversion {
        raw: text.to_string(),
        value_type: value_type.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_int<T>(text: &str, value_type: &ValueType) -> Result<T, CollectError>
where
    T: FromStr,
    T::Err: ToString,
{
    text.parse::<T>().map_err(|e| conversion_error(text, value_type, e))
}

fn parse_uint<T>(text: &str, value_type: &ValueType) -> Result<T, CollectError>
where
    T: FromStr,
    T::Err: ToString,
{
    // Unsigned values take no sign prefix at all.
    if text.starts_with(['+', '-']) {
        return Err(conversion_error(text, value_type, "sign prefix is not permitted"));
    }

    parse_int(text, value_type)
}

trait Float: FromStr {
    fn overflowed(&self) -> bool;
}

impl Float for f64 {
    fn overflowed(&self) -> bool {
        self.is_infinite()
    }
}

impl Float for f32 {
    fn overflowed(&self) -> bool {
        self.is_infinite()
    }
}

fn parse_float<T>(text: &str, value_type: &ValueType) -> Result<T, CollectError>
where
    T: Float,
    T::Err: ToString,
{
    let value = text.parse::<T>().map_err(|e| conversion_error(text, value_type, e))?;

    if value.overflowed() && !is_infinity_literal(text) {
        return Err(conversion_error(text, value_type, "value out of range"));
    }

    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(raw: &str, tag: &str) -> TypedValue {
        convert(raw.as_bytes(), &ValueType::parse(tag)).unwrap()
    }

    fn fails(raw: &str, tag: &str) -> bool {
        matches!(
            convert(raw.as_bytes(), &ValueType::parse(tag)),
            Err(CollectError::Conversion { .. })
        )
    }

    #[test]
    fn test_decimal_fractions_fail_for_integers() {
        for tag in ["int64", "int32", "int16", "int8", "uint64", "uint32", "uint16", "uint8"] {
            assert!(fails("45.4", tag), "45.4 should not convert to {tag}");
            assert!(!fails("45", tag), "45 should convert to {tag}");
        }
    }

    #[test]
    fn test_non_numeric_text_fails() {
        for tag in ["float64", "float32", "int64", "uint8"] {
            assert!(fails("test", tag), "test should not convert to {tag}");
        }
    }

    #[test]
    fn test_floats() {
        assert_eq!(ok("45.4", "float64"), TypedValue::Float64(45.4));
        assert_eq!(ok("3.55", "float32"), TypedValue::Float32(3.55));
        assert_eq!(ok("-1e3", "float64"), TypedValue::Float64(-1000.0));
    }

    #[test]
    fn test_float_overflow_fails() {
        assert!(fails("1e400", "float64"));
        assert!(fails("1e40", "float32"));
        assert!(!fails("1e40", "float64"));
    }

    #[test]
    fn test_explicit_infinity_is_accepted() {
        assert_eq!(ok("inf", "float64"), TypedValue::Float64(f64::INFINITY));
        assert_eq!(ok("-Infinity", "float32"), TypedValue::Float32(f32::NEG_INFINITY));
    }

    #[test]
    fn test_integer_width_boundaries() {
        assert_eq!(ok("127", "int8"), TypedValue::Int8(127));
        assert_eq!(ok("-128", "int8"), TypedValue::Int8(-128));
        assert!(fails("128", "int8"));
        assert_eq!(ok("-32768", "int16"), TypedValue::Int16(i16::MIN));
        assert!(fails("32768", "int16"));
        assert_eq!(ok("2147483647", "int32"), TypedValue::Int32(i32::MAX));
        assert!(fails("2147483648", "int32"));
        assert_eq!(ok("-9223372036854775808", "int64"), TypedValue::Int64(i64::MIN));
        assert!(fails("9223372036854775808", "int64"));
    }

    #[test]
    fn test_unsigned_width_boundaries() {
        assert_eq!(ok("255", "uint8"), TypedValue::Uint8(255));
        assert!(fails("256", "uint8"));
        assert_eq!(ok("65535", "uint16"), TypedValue::Uint16(u16::MAX));
        assert!(fails("65536", "uint16"));
        assert_eq!(ok("4294967295", "uint32"), TypedValue::Uint32(u32::MAX));
        assert!(fails("4294967296", "uint32"));
        assert_eq!(ok("18446744073709551615", "uint64"), TypedValue::Uint64(u64::MAX));
        assert!(fails("18446744073709551616", "uint64"));
    }

    #[test]
    fn test_unsigned_rejects_signs() {
        assert!(fails("-1", "uint32"));
        assert!(fails("+1", "uint64"));
        assert!(fails("-0", "uint8"));
    }

    #[test]
    fn test_signed_accepts_plus_sign() {
        assert_eq!(ok("+17", "int32"), TypedValue::Int32(17));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(fails("45\n", "int64"));
        assert!(fails(" 45", "int64"));
        assert!(fails("3.5\n", "float64"));
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(ok("hi\n", "string"), TypedValue::String("hi\n".into()));
        assert_eq!(ok("", "string"), TypedValue::String(String::new()));
        assert_eq!(ok("  padded  ", "string"), TypedValue::String("  padded  ".into()));
    }

    #[test]
    fn test_invalid_utf8_string_is_replaced() {
        let value = convert(&[0x66, 0x6f, 0xff], &ValueType::String).unwrap();
        assert_eq!(value, TypedValue::String("fo\u{fffd}".into()));
    }

    #[test]
    fn test_unsupported_type_degrades_to_string() {
        assert_eq!(ok("45", "unsuported_type"), TypedValue::String("45".into()));
        assert_eq!(ok("", "bool"), TypedValue::String(String::new()));
    }

    #[test]
    fn test_conversion_error_carries_context() {
        let err = convert(b"abc", &ValueType::Int16).unwrap_err();
        match err {
            CollectError::Conversion { raw, value_type, .. } => {
                assert_eq!(raw, "abc");
                assert_eq!(value_type, "int16");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_fails_for_numbers() {
        assert!(fails("", "int64"));
        assert!(fails("", "float64"));
    }
}
