//! Value-to-text templates
//!
//! Renders decoded [`Value`]s using the fixed textual templates each kind
//! prints with. Anything that needs the host (object descriptions, string
//! memory, locale) goes through a [`Describer`].

use super::describe::Describer;
use super::types::Value;

impl Value {
    /// Render this value as display text
    pub fn render<D: Describer + ?Sized>(&self, host: &D) -> String {
        match self {
            Value::BoolOrChar(v) => bool_or_char(*v),
            Value::FourCharCode(v) => four_char_code(*v),
            Value::I16(v) => v.to_string(),
            Value::U16(v) => v.to_string(),
            Value::I32(v) => v.to_string(),
            Value::U32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::U64(v) => v.to_string(),
            Value::F32(v) => fixed(f64::from(*v)),
            Value::F64(v) => fixed(*v),
            Value::Point(p) => format!("{{{}, {}}}", general(p.x), general(p.y)),
            Value::Size(s) => format!("{{{}, {}}}", general(s.width), general(s.height)),
            Value::Rect(r) => format!(
                "{{{{{}, {}}}, {{{}, {}}}}}",
                general(r.origin.x),
                general(r.origin.y),
                general(r.size.width),
                general(r.size.height)
            ),
            Value::EdgeInsets(e) => format!(
                "{{{}, {}, {}, {}}}",
                general(e.top),
                general(e.left),
                general(e.bottom),
                general(e.right)
            ),
            Value::Range(r) => host.describe_range(*r),
            Value::Decimal(d) => host.describe_decimal(d),
            Value::Coordinate(c) => format!(
                "{{latitude={},longitude={}}}",
                general(c.latitude),
                general(c.longitude)
            ),
            Value::CharArray(bytes) => c_text(bytes),
            Value::CString(0) => "(null)".to_string(),
            Value::CString(address) => match host.read_c_string(*address) {
                Some(bytes) => c_text(&bytes),
                None => format!("<char*: {:#x}>", address),
            },
            Value::Object(_, 0) => "(null)".to_string(),
            Value::Object(kind, address) => host
                .describe_object(*kind, *address)
                .unwrap_or_else(|| format!("<{}: {:#x}>", kind.label(), address)),
            Value::Pointer(address) => format!("(void*){:#x}", address),
        }
    }
}

/// Boolean-like byte: exactly 1 or 0 reads as a boolean, anything else as a character
pub fn bool_or_char(value: u8) -> String {
    match value {
        1 => "YES".to_string(),
        0 => "NO".to_string(),
        other => {
            let mut out = String::from("'");
            push_c_char(&mut out, other);
            out.push('\'');
            out
        }
    }
}

/// Four-character code: decimal value followed by its bytes, high to low
pub fn four_char_code(value: u32) -> String {
    let mut out = format!("{} ('", value);
    for byte in value.to_be_bytes() {
        push_c_char(&mut out, byte);
    }
    out.push_str("')");
    out
}

/// Append a single C `char`
///
/// ASCII bytes are written as-is. Bytes from 0x80 up have no character of
/// their own in UTF-8 output and are written as `\xNN`.
fn push_c_char(out: &mut String, byte: u8) {
    if byte.is_ascii() {
        out.push(char::from(byte));
    } else {
        out.push_str(&format!("\\x{:02x}", byte));
    }
}

/// Fixed-point with six fractional digits
pub fn fixed(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    format!("{:.6}", value)
}

/// General float format: shortest round-trip digits, positional for
/// moderate exponents and scientific otherwise
pub fn general(value: f64) -> String {
    if !value.is_finite() {
        return fixed(value);
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.222e2"
    let sci = format!("{:e}", value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-5 < exponent && exponent < 16) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}{}e{}{:02}",
            sign,
            mantissa,
            exp_sign,
            exponent.unsigned_abs()
        );
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let mut out = String::from(sign);
    if exponent < 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-exponent - 1) as usize));
        out.push_str(&digits);
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', int_len - digits.len()));
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}

/// Text up to the first NUL (or the whole slice if there is none)
pub fn c_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::NoHost;
    use crate::debug::geometry::{Coordinate, Point, Range, Rect};
    use crate::debug::types::ObjectKind;

    #[test]
    fn test_bool_or_char() {
        assert_eq!(bool_or_char(1), "YES");
        assert_eq!(bool_or_char(0), "NO");
        assert_eq!(bool_or_char(65), "'A'");
    }

    #[test]
    fn test_four_char_code() {
        assert_eq!(four_char_code(0x41424344), "1094861636 ('ABCD')");
        assert_eq!(four_char_code(0x7f41e942), "2135025986 ('\x7fA\\xe9B')");
    }

    #[test]
    fn test_high_bytes_are_escaped() {
        assert_eq!(bool_or_char(0xE9), "'\\xe9'");
        assert_eq!(bool_or_char(0x80), "'\\x80'");
        assert_eq!(bool_or_char(0x7F), "'\x7f'");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(3.5), "3.500000");
        assert_eq!(fixed(-0.25), "-0.250000");
        assert_eq!(fixed(1.0 / 3.0), "0.333333");
        assert_eq!(fixed(f64::INFINITY), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY), "-inf");
        assert_eq!(fixed(f64::NAN), "nan");
    }

    #[test]
    fn test_general() {
        assert_eq!(general(37.5), "37.5");
        assert_eq!(general(-122.2), "-122.2");
        assert_eq!(general(2.0), "2");
        assert_eq!(general(0.0), "0");
        assert_eq!(general(100.0), "100");
        assert_eq!(general(0.001), "0.001");
        assert_eq!(general(1e20), "1e+20");
        assert_eq!(general(1.5e-7), "1.5e-07");
        assert_eq!(general(-2.5e300), "-2.5e+300");
    }

    #[test]
    fn test_c_text() {
        assert_eq!(c_text(b"AB\0\0\0"), "AB");
        assert_eq!(c_text(b"ABCDE"), "ABCDE");
        assert_eq!(c_text(b"\0AB"), "");
    }

    #[test]
    fn test_render_geometry() {
        assert_eq!(Value::Point(Point::new(1.5, 2.0)).render(&NoHost), "{1.5, 2}");
        assert_eq!(
            Value::Rect(Rect::new(0.0, 10.0, 320.0, 480.5)).render(&NoHost),
            "{{0, 10}, {320, 480.5}}"
        );
        assert_eq!(
            Value::Coordinate(Coordinate::new(37.5, -122.2)).render(&NoHost),
            "{latitude=37.5,longitude=-122.2}"
        );
        assert_eq!(
            Value::Range(Range {
                location: 3,
                length: 7
            })
            .render(&NoHost),
            "{3, 7}"
        );
    }

    #[test]
    fn test_render_references_without_host() {
        assert_eq!(Value::Pointer(0x1000).render(&NoHost), "(void*)0x1000");
        assert_eq!(Value::Pointer(0).render(&NoHost), "(void*)0x0");
        assert_eq!(Value::CString(0).render(&NoHost), "(null)");
        assert_eq!(Value::CString(0x20).render(&NoHost), "<char*: 0x20>");
        assert_eq!(
            Value::Object(ObjectKind::Object, 0).render(&NoHost),
            "(null)"
        );
        assert_eq!(
            Value::Object(ObjectKind::Class, 0xbeef).render(&NoHost),
            "<Class: 0xbeef>"
        );
    }
}
