//! Type descriptor alphabet
//!
//! Literal descriptors follow the 64-bit type-encoding alphabet. Two
//! descriptors share a literal with an earlier entry: `long` encodes as
//! [`I64`] and `unsigned int` as [`FOUR_CHAR_CODE`].

pub const POINT: &str = "{CGPoint=dd}";
pub const SIZE: &str = "{CGSize=dd}";
pub const RECT: &str = "{CGRect={CGPoint=dd}{CGSize=dd}}";
pub const EDGE_INSETS: &str = "{UIEdgeInsets=dddd}";
pub const RANGE: &str = "{_NSRange=QQ}";
pub const CLASS: &str = "#";
pub const SELECTOR: &str = ":";
pub const BOOL: &str = "c";
pub const DECIMAL: &str = "{?=b8b4b1b1b18[8S]}";
pub const CF_STRING: &str = "^{__CFString=}";
pub const CF_ARRAY: &str = "^{__CFArray=}";
pub const FOUR_CHAR_CODE: &str = "I";
pub const I64: &str = "q";
pub const U64: &str = "Q";
pub const F32: &str = "f";
pub const F64: &str = "d";
pub const OBJECT: &str = "@";
pub const I16: &str = "s";
pub const U16: &str = "S";
pub const I32: &str = "i";
pub const U32: &str = "I";
pub const LONG_DOUBLE: &str = "D";
pub const C_STRING: &str = "*";
pub const CONST_C_STRING: &str = "r*";
pub const POINTER: &str = "^v";
pub const COORDINATE: &str = "{?=dd}";

/// Length of a fixed-size character array descriptor (`[<N>c]`)
///
/// Matches by shape: a `[`, one or more ASCII digits, then `c]`.
pub fn char_array_len(descriptor: &str) -> Option<usize> {
    let digits = descriptor.strip_prefix('[')?.strip_suffix("c]")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Descriptor for a character array of `len` bytes
pub fn char_array(len: usize) -> String {
    format!("[{}c]", len)
}
