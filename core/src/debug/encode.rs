//! Descriptors for Rust values
//!
//! [`Encode`] pairs a value with the descriptor the catalog knows it by and
//! with its raw bytes, so a Rust value can go through the same dispatcher as
//! a foreign `(descriptor, buffer)` pair.

use std::borrow::Cow;

use super::decimal::Decimal;
use super::descriptor as desc;
use super::geometry::{Coordinate, EdgeInsets, Point, Range, Rect, Size};

/// A value that knows its own type descriptor
pub trait Encode {
    fn descriptor(&self) -> Cow<'static, str>;

    /// In-memory bytes, native byte order
    fn raw_bytes(&self) -> Vec<u8>;
}

macro_rules! encode_pod {
    ($($ty:ty => $descriptor:expr),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn descriptor(&self) -> Cow<'static, str> {
                    Cow::Borrowed($descriptor)
                }

                fn raw_bytes(&self) -> Vec<u8> {
                    bytemuck::bytes_of(self).to_vec()
                }
            }
        )*
    };
}

encode_pod! {
    // Signed char shares the boolean descriptor
    i8 => desc::BOOL,
    // Unsigned char has no rule of its own
    u8 => "C",
    i16 => desc::I16,
    u16 => desc::U16,
    i32 => desc::I32,
    u32 => desc::U32,
    i64 => desc::I64,
    u64 => desc::U64,
    f32 => desc::F32,
    f64 => desc::F64,
    Point => desc::POINT,
    Size => desc::SIZE,
    Rect => desc::RECT,
    EdgeInsets => desc::EDGE_INSETS,
    Range => desc::RANGE,
    Coordinate => desc::COORDINATE,
}

impl Encode for bool {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::BOOL)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }
}

impl Encode for Decimal {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::DECIMAL)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Owned(desc::char_array(N))
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> Encode for [i8; N] {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Owned(desc::char_array(N))
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.iter().map(|b| *b as u8).collect()
    }
}

impl<T> Encode for *const T {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::POINTER)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        (*self as usize).to_ne_bytes().to_vec()
    }
}

impl<T> Encode for *mut T {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::POINTER)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        (*self as usize).to_ne_bytes().to_vec()
    }
}

/// Address of a NUL-terminated string in host memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CStringPtr(pub usize);

/// Address of an object the host can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPtr(pub usize);

impl Encode for CStringPtr {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::C_STRING)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.0.to_ne_bytes().to_vec()
    }
}

impl Encode for ObjectPtr {
    fn descriptor(&self) -> Cow<'static, str> {
        Cow::Borrowed(desc::OBJECT)
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.0.to_ne_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::render;

    fn render_encoded<T: Encode>(value: &T) -> Option<String> {
        render(&value.descriptor(), &value.raw_bytes())
    }

    #[test]
    fn test_primitive_descriptors() {
        assert_eq!(true.descriptor(), "c");
        assert_eq!(7i16.descriptor(), "s");
        assert_eq!(7u64.descriptor(), "Q");
        assert_eq!(1.0f64.descriptor(), "d");
        assert_eq!(Coordinate::default().descriptor(), "{?=dd}");
        assert_eq!([0u8; 16].descriptor(), "[16c]");
    }

    #[test]
    fn test_encoded_values_render() {
        assert_eq!(render_encoded(&true).as_deref(), Some("YES"));
        assert_eq!(render_encoded(&false).as_deref(), Some("NO"));
        assert_eq!(render_encoded(&65i8).as_deref(), Some("'A'"));
        assert_eq!(render_encoded(&-5i32).as_deref(), Some("-5"));
        assert_eq!(render_encoded(&2.5f32).as_deref(), Some("2.500000"));
        assert_eq!(render_encoded(b"name\0\0\0\0").as_deref(), Some("name"));
        assert_eq!(
            render_encoded(&Coordinate::new(51.5, -0.125)).as_deref(),
            Some("{latitude=51.5,longitude=-0.125}")
        );
        assert_eq!(
            render_encoded(&Decimal::new(1999, -2, false)).as_deref(),
            Some("19.99")
        );
        assert_eq!(
            render_encoded(&std::ptr::null::<u8>()).as_deref(),
            Some("(void*)0x0")
        );
        assert_eq!(render_encoded(&ObjectPtr(0)).as_deref(), Some("(null)"));
        assert_eq!(render_encoded(&CStringPtr(0)).as_deref(), Some("(null)"));
    }

    #[test]
    fn test_small_integers_are_ambiguous() {
        // A signed byte of 0 or 1 cannot be told apart from a boolean
        assert_eq!(render_encoded(&1i8).as_deref(), Some("YES"));
        assert_eq!(render_encoded(&0i8).as_deref(), Some("NO"));
        // Unsigned char and unsigned int follow the catalog as-is
        assert_eq!(render_encoded(&7u8), None);
        assert_eq!(
            render_encoded(&0x6d6f6f76u32).as_deref(),
            Some("1836019574 ('moov')")
        );
    }
}
