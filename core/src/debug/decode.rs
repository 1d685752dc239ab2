//! Size-checked decoding of raw buffers
//!
//! Every kind validates the buffer length against its width before any byte
//! is reinterpreted. Values are read in native byte order.

use bytemuck::Pod;

use super::decimal::Decimal;
use super::error::DecodeError;
use super::types::{Kind, LONG_DOUBLE_FORMAT, LongDoubleFormat, ObjectKind, Value};

/// Decode `data` as a value of `kind`
///
/// Trailing bytes past the kind's width are ignored.
pub fn decode(kind: Kind, data: &[u8]) -> Result<Value, DecodeError> {
    let size = kind.byte_size();

    // Bounds check
    if data.len() < size {
        return Err(DecodeError {
            kind: kind.name(),
            expected: size,
            actual: data.len(),
        });
    }
    let data = &data[..size];

    let value = match kind {
        Kind::BoolOrChar => Value::BoolOrChar(data[0]),
        Kind::FourCharCode => Value::FourCharCode(read(data)),
        Kind::I16 => Value::I16(read(data)),
        Kind::U16 => Value::U16(read(data)),
        Kind::I32 => Value::I32(read(data)),
        Kind::U32 => Value::U32(read(data)),
        Kind::I64 => Value::I64(read(data)),
        Kind::U64 => Value::U64(read(data)),
        Kind::F32 => Value::F32(read(data)),
        Kind::F64 => Value::F64(read(data)),
        Kind::LongDouble => Value::F64(read_long_double(LONG_DOUBLE_FORMAT, data)),
        Kind::Point => Value::Point(read(data)),
        Kind::Size => Value::Size(read(data)),
        Kind::Rect => Value::Rect(read(data)),
        Kind::EdgeInsets => Value::EdgeInsets(read(data)),
        Kind::Range => Value::Range(read(data)),
        Kind::Coordinate => Value::Coordinate(read(data)),
        Kind::Decimal => Value::Decimal(Decimal::from_bytes(data)),
        Kind::CharArray(_) => Value::CharArray(data.to_vec()),
        Kind::CString | Kind::ConstCString => Value::CString(read(data)),
        Kind::Pointer => Value::Pointer(read(data)),
        Kind::Class => Value::Object(ObjectKind::Class, read(data)),
        Kind::Selector => Value::Object(ObjectKind::Selector, read(data)),
        Kind::CfString => Value::Object(ObjectKind::CfString, read(data)),
        Kind::CfArray => Value::Object(ObjectKind::CfArray, read(data)),
        Kind::Object => Value::Object(ObjectKind::Object, read(data)),
    };
    Ok(value)
}

/// Unaligned read of a plain-data value; `data` is already length-checked
fn read<T: Pod>(data: &[u8]) -> T {
    bytemuck::pod_read_unaligned(&data[..std::mem::size_of::<T>()])
}

/// Read a `long double` stored in `format`; `data` is already length-checked
fn read_long_double(format: LongDoubleFormat, data: &[u8]) -> f64 {
    match format {
        LongDoubleFormat::X87Extended => {
            let mut raw = [0u8; 10];
            raw.copy_from_slice(&data[..10]);
            extended_to_f64(raw)
        }
        LongDoubleFormat::Binary128 => quad_to_f64(read(data)),
        LongDoubleFormat::Double => read(data),
    }
}

/// Convert an x87 80-bit extended float (little-endian) to the nearest double
///
/// Layout: 64-bit significand with an explicit integer bit, then a 16-bit
/// word holding the sign and a 15-bit exponent biased by 16383.
pub fn extended_to_f64(raw: [u8; 10]) -> f64 {
    let mut sig_bytes = [0u8; 8];
    sig_bytes.copy_from_slice(&raw[..8]);
    let significand = u64::from_le_bytes(sig_bytes);
    let sign_exp = u16::from_le_bytes([raw[8], raw[9]]);

    let negative = sign_exp & 0x8000 != 0;
    let exponent = i32::from(sign_exp & 0x7FFF);

    if exponent == 0x7FFF {
        // Top bit is the integer bit; the rest distinguishes inf from NaN
        return special(negative, significand << 1 == 0);
    }
    scaled(negative, significand, exponent)
}

/// Convert an IEEE binary128 float, given as its bit pattern, to the nearest double
///
/// Layout: sign bit, 15-bit exponent biased by 16383, 112-bit fraction with
/// an implicit integer bit.
pub fn quad_to_f64(bits: u128) -> f64 {
    let negative = bits >> 127 != 0;
    let exponent = ((bits >> 112) & 0x7FFF) as i32;
    let fraction = bits & ((1u128 << 112) - 1);

    if exponent == 0x7FFF {
        return special(negative, fraction == 0);
    }

    // Top 64 bits of the 113-bit significand, integer bit at bit 63
    let significand = if exponent == 0 {
        fraction
    } else {
        fraction | (1u128 << 112)
    };
    scaled(negative, (significand >> 49) as u64, exponent)
}

fn special(negative: bool, infinite: bool) -> f64 {
    match (infinite, negative) {
        (false, _) => f64::NAN,
        (true, false) => f64::INFINITY,
        (true, true) => f64::NEG_INFINITY,
    }
}

/// `significand * 2^(exponent - 16383 - 63)`, with an explicit integer bit at bit 63
fn scaled(negative: bool, significand: u64, exponent: i32) -> f64 {
    let sign = if negative { -1.0 } else { 1.0 };
    if significand == 0 {
        return sign * 0.0;
    }

    // Denormals use the minimum exponent without an implicit bias shift
    let unbiased = if exponent == 0 { 1 - 16383 } else { exponent - 16383 };
    let scale = unbiased - 63;

    // Split the power of two so neither factor underflows early
    let half = scale / 2;
    sign * (significand as f64) * 2f64.powi(half) * 2f64.powi(scale - half)
}
