//! Value kind definitions
//!
//! Core types for the descriptor-directed formatter: the closed set of kinds
//! the catalog can resolve a descriptor to, and the decoded values they
//! produce.

use super::decimal::Decimal;
use super::geometry::{Coordinate, EdgeInsets, Point, Range, Rect, Size};

/// Width of a pointer-sized value on the running platform
pub const POINTER_SIZE: usize = std::mem::size_of::<usize>();

/// In-memory representation of C `long double`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongDoubleFormat {
    /// x87 80-bit extended, padded to 16 bytes (12 on 32-bit x86)
    X87Extended,
    /// IEEE 754 binary128
    Binary128,
    /// Same as `double`
    Double,
}

impl LongDoubleFormat {
    pub const fn byte_size(&self) -> usize {
        match self {
            LongDoubleFormat::X87Extended if cfg!(target_arch = "x86") => 12,
            LongDoubleFormat::X87Extended | LongDoubleFormat::Binary128 => 16,
            LongDoubleFormat::Double => 8,
        }
    }
}

/// `long double` layout of the running platform
#[cfg(all(
    any(target_arch = "x86_64", target_arch = "x86"),
    not(target_env = "msvc")
))]
pub const LONG_DOUBLE_FORMAT: LongDoubleFormat = LongDoubleFormat::X87Extended;

/// `long double` layout of the running platform
#[cfg(all(
    any(
        target_arch = "aarch64",
        target_arch = "riscv64",
        target_arch = "loongarch64",
        target_arch = "s390x"
    ),
    not(target_vendor = "apple"),
    not(target_os = "windows")
))]
pub const LONG_DOUBLE_FORMAT: LongDoubleFormat = LongDoubleFormat::Binary128;

// Apple arm64, MSVC and 32-bit ARM alias `long double` to `double`. On
// PowerPC double-double the first eight bytes are the high double.
/// `long double` layout of the running platform
#[cfg(not(any(
    all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(target_env = "msvc")
    ),
    all(
        any(
            target_arch = "aarch64",
            target_arch = "riscv64",
            target_arch = "loongarch64",
            target_arch = "s390x"
        ),
        not(target_vendor = "apple"),
        not(target_os = "windows")
    )
)))]
pub const LONG_DOUBLE_FORMAT: LongDoubleFormat = LongDoubleFormat::Double;

/// Width of `long double` on the running platform
pub const LONG_DOUBLE_SIZE: usize = LONG_DOUBLE_FORMAT.byte_size();

/// Value kind identifier resolved from a type descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // Geometry
    Point,      // { x: f64, y: f64 }
    Size,       // { width: f64, height: f64 }
    Rect,       // { origin: Point, size: Size }
    EdgeInsets, // { top, left, bottom, right: f64 }
    Range,      // { location: u64, length: u64 }

    // Object references
    Class,
    Selector,
    CfString,
    CfArray,
    Object,

    // Scalars
    BoolOrChar,
    Decimal,
    FourCharCode,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    LongDouble,

    // Strings and pointers
    CString,
    ConstCString,
    Pointer,

    // Structural
    CharArray(usize),
    Coordinate,
}

impl Kind {
    /// Get the byte size of this kind
    pub fn byte_size(&self) -> usize {
        match self {
            Kind::BoolOrChar => 1,
            Kind::I16 | Kind::U16 => 2,
            Kind::FourCharCode | Kind::I32 | Kind::U32 | Kind::F32 => 4,
            Kind::I64 | Kind::U64 | Kind::F64 => 8,
            Kind::LongDouble => LONG_DOUBLE_SIZE,
            Kind::Decimal => Decimal::SIZE,
            Kind::Point | Kind::Size | Kind::Range | Kind::Coordinate => 16,
            Kind::Rect | Kind::EdgeInsets => 32,
            Kind::Class
            | Kind::Selector
            | Kind::CfString
            | Kind::CfArray
            | Kind::Object
            | Kind::CString
            | Kind::ConstCString
            | Kind::Pointer => POINTER_SIZE,
            Kind::CharArray(len) => *len,
        }
    }

    /// Get a human-readable kind name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Point => "CGPoint",
            Kind::Size => "CGSize",
            Kind::Rect => "CGRect",
            Kind::EdgeInsets => "UIEdgeInsets",
            Kind::Range => "NSRange",
            Kind::Class => "Class",
            Kind::Selector => "SEL",
            Kind::CfString => "CFStringRef",
            Kind::CfArray => "CFArrayRef",
            Kind::Object => "id",
            Kind::BoolOrChar => "BOOL",
            Kind::Decimal => "NSDecimal",
            Kind::FourCharCode => "FourCharCode",
            Kind::I16 => "short",
            Kind::U16 => "unsigned short",
            Kind::I32 => "int",
            Kind::U32 => "unsigned int",
            Kind::I64 => "long long",
            Kind::U64 => "unsigned long long",
            Kind::F32 => "float",
            Kind::F64 => "double",
            Kind::LongDouble => "long double",
            Kind::CString => "char*",
            Kind::ConstCString => "const char*",
            Kind::Pointer => "void*",
            Kind::CharArray(_) => "char[]",
            Kind::Coordinate => "CLLocationCoordinate2D",
        }
    }

    /// Object flavor for kinds whose value is a reference the host describes
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Kind::Class => Some(ObjectKind::Class),
            Kind::Selector => Some(ObjectKind::Selector),
            Kind::CfString => Some(ObjectKind::CfString),
            Kind::CfArray => Some(ObjectKind::CfArray),
            Kind::Object => Some(ObjectKind::Object),
            _ => None,
        }
    }
}

/// Reference flavors handed to [`Describer::describe_object`](super::Describer::describe_object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Object,
    Class,
    Selector,
    CfString,
    CfArray,
}

impl ObjectKind {
    /// Label used when the host cannot describe the reference
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Object => "id",
            ObjectKind::Class => "Class",
            ObjectKind::Selector => "SEL",
            ObjectKind::CfString => "CFStringRef",
            ObjectKind::CfArray => "CFArrayRef",
        }
    }
}

/// Decoded value, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    BoolOrChar(u8),
    FourCharCode(u32),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    // Double and long double both land here after decoding
    F64(f64),
    Point(Point),
    Size(Size),
    Rect(Rect),
    EdgeInsets(EdgeInsets),
    Range(Range),
    Decimal(Decimal),
    Coordinate(Coordinate),
    /// Inline storage of a fixed-size character array
    CharArray(Vec<u8>),
    /// Address of a NUL-terminated string
    CString(usize),
    Object(ObjectKind, usize),
    Pointer(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_byte_sizes() {
        assert_eq!(Kind::BoolOrChar.byte_size(), 1);
        assert_eq!(Kind::I16.byte_size(), 2);
        assert_eq!(Kind::U16.byte_size(), 2);
        assert_eq!(Kind::FourCharCode.byte_size(), 4);
        assert_eq!(Kind::I32.byte_size(), 4);
        assert_eq!(Kind::F32.byte_size(), 4);
        assert_eq!(Kind::I64.byte_size(), 8);
        assert_eq!(Kind::F64.byte_size(), 8);
        assert_eq!(Kind::Decimal.byte_size(), 20);
        assert_eq!(Kind::Point.byte_size(), 16);
        assert_eq!(Kind::Rect.byte_size(), 32);
        assert_eq!(Kind::EdgeInsets.byte_size(), 32);
        assert_eq!(Kind::Coordinate.byte_size(), 16);
        assert_eq!(Kind::CharArray(5).byte_size(), 5);
        assert_eq!(Kind::Pointer.byte_size(), POINTER_SIZE);
        assert_eq!(Kind::Object.byte_size(), POINTER_SIZE);
        assert_eq!(Kind::LongDouble.byte_size(), LONG_DOUBLE_FORMAT.byte_size());
    }

    #[test]
    fn test_long_double_format() {
        assert_eq!(LongDoubleFormat::Binary128.byte_size(), 16);
        assert_eq!(LongDoubleFormat::Double.byte_size(), 8);

        if cfg!(all(target_arch = "x86_64", not(target_env = "msvc"))) {
            assert_eq!(LONG_DOUBLE_FORMAT, LongDoubleFormat::X87Extended);
            assert_eq!(LONG_DOUBLE_SIZE, 16);
        }
        if cfg!(all(target_arch = "aarch64", target_os = "linux")) {
            assert_eq!(LONG_DOUBLE_FORMAT, LongDoubleFormat::Binary128);
            assert_eq!(LONG_DOUBLE_SIZE, 16);
        }
        if cfg!(all(target_arch = "aarch64", target_vendor = "apple")) {
            assert_eq!(LONG_DOUBLE_FORMAT, LongDoubleFormat::Double);
            assert_eq!(LONG_DOUBLE_SIZE, 8);
        }
    }

    #[test]
    fn test_object_kinds() {
        assert_eq!(Kind::Class.object_kind(), Some(ObjectKind::Class));
        assert_eq!(Kind::CfArray.object_kind(), Some(ObjectKind::CfArray));
        assert_eq!(Kind::Pointer.object_kind(), None);
        assert_eq!(Kind::CString.object_kind(), None);
    }
}
