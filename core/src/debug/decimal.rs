//! Fixed-point decimal number struct
//!
//! Layout (20 bytes, native byte order):
//! - a 32-bit header word holding bitfields, least significant first:
//!   exponent (8, signed), length (4), negative (1), compact (1), reserved (18)
//! - eight 16-bit mantissa words, least significant word first
//!
//! The value is `mantissa * 10^exponent`, where only the first `length`
//! mantissa words are significant.

/// Decoded decimal number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal {
    pub exponent: i8,
    pub length: u8,
    pub negative: bool,
    pub compact: bool,
    pub mantissa: [u16; 8],
}

impl Decimal {
    /// Encoded size in bytes
    pub const SIZE: usize = 20;

    /// Build a decimal from a mantissa and base-10 exponent
    pub fn new(mantissa: u128, exponent: i8, negative: bool) -> Self {
        let mut words = [0u16; 8];
        let mut rest = mantissa;
        let mut length = 0;
        for (i, word) in words.iter_mut().enumerate() {
            *word = (rest & 0xFFFF) as u16;
            rest >>= 16;
            if *word != 0 {
                length = i as u8 + 1;
            }
        }
        Self {
            exponent,
            length,
            negative,
            compact: true,
            mantissa: words,
        }
    }

    /// The not-a-number encoding (zero length, negative flag set)
    pub fn nan() -> Self {
        Self {
            negative: true,
            ..Self::default()
        }
    }

    pub fn is_nan(&self) -> bool {
        self.length == 0 && self.negative
    }

    /// Decode from the first [`Decimal::SIZE`] bytes of `data`
    ///
    /// The caller guarantees `data.len() >= Decimal::SIZE`.
    pub(crate) fn from_bytes(data: &[u8]) -> Self {
        let header: u32 = bytemuck::pod_read_unaligned(&data[0..4]);
        let mut mantissa = [0u16; 8];
        for (i, word) in mantissa.iter_mut().enumerate() {
            let start = 4 + i * 2;
            *word = bytemuck::pod_read_unaligned(&data[start..start + 2]);
        }
        Self {
            exponent: (header & 0xFF) as u8 as i8,
            length: ((header >> 8) & 0xF) as u8,
            negative: (header >> 12) & 1 == 1,
            compact: (header >> 13) & 1 == 1,
            mantissa,
        }
    }

    /// Encode into the 20-byte layout
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let header = u32::from(self.exponent as u8)
            | (u32::from(self.length & 0xF) << 8)
            | (u32::from(self.negative) << 12)
            | (u32::from(self.compact) << 13);
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&header.to_ne_bytes());
        for (i, word) in self.mantissa.iter().enumerate() {
            let start = 4 + i * 2;
            out[start..start + 2].copy_from_slice(&word.to_ne_bytes());
        }
        out
    }

    /// Significant mantissa as an integer
    pub fn mantissa_value(&self) -> u128 {
        let len = usize::from(self.length).min(self.mantissa.len());
        self.mantissa[..len]
            .iter()
            .rev()
            .fold(0u128, |acc, word| (acc << 16) | u128::from(*word))
    }

    /// Exact decimal text using `separator` between integer and fraction
    pub fn to_string_with_separator(&self, separator: char) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }

        let digits = self.mantissa_value().to_string();
        if digits == "0" {
            return digits;
        }

        let mut out = String::new();
        if self.negative {
            out.push('-');
        }

        if self.exponent >= 0 {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', self.exponent as usize));
            return out;
        }

        let scale = usize::from(self.exponent.unsigned_abs());
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            out.push_str(int_part);
            out.push(separator);
            out.push_str(frac_part);
        } else {
            out.push('0');
            out.push(separator);
            out.extend(std::iter::repeat_n('0', scale - digits.len()));
            out.push_str(&digits);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_text() {
        assert_eq!(Decimal::new(12345, -2, false).to_string_with_separator('.'), "123.45");
        assert_eq!(Decimal::new(12345, -2, true).to_string_with_separator('.'), "-123.45");
        assert_eq!(Decimal::new(12, 3, false).to_string_with_separator('.'), "12000");
        assert_eq!(Decimal::new(5, -3, false).to_string_with_separator('.'), "0.005");
        assert_eq!(Decimal::new(0, 0, false).to_string_with_separator('.'), "0");
    }

    #[test]
    fn test_decimal_locale_separator() {
        assert_eq!(Decimal::new(314, -2, false).to_string_with_separator(','), "3,14");
    }

    #[test]
    fn test_decimal_nan() {
        assert!(Decimal::nan().is_nan());
        assert_eq!(Decimal::nan().to_string_with_separator('.'), "NaN");
    }

    #[test]
    fn test_decimal_wide_mantissa() {
        let value = u128::from(u64::MAX) + 1;
        let decimal = Decimal::new(value, 0, false);
        assert_eq!(decimal.length, 5);
        assert_eq!(decimal.mantissa_value(), value);
        assert_eq!(decimal.to_string_with_separator('.'), "18446744073709551616");
    }

    #[test]
    fn test_decimal_byte_layout() {
        let decimal = Decimal::new(0x1_0002, -4, true);
        let bytes = decimal.to_bytes();
        assert_eq!(Decimal::from_bytes(&bytes), decimal);

        let header = u32::from_ne_bytes(bytes[0..4].try_into().unwrap());
        assert_eq!(header & 0xFF, 0xFC); // -4 as a byte
        assert_eq!((header >> 8) & 0xF, 2);
        assert_eq!((header >> 12) & 1, 1);
    }
}
