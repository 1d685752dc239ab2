//! Host describe capabilities
//!
//! Some kinds cannot be rendered from their bytes alone: object references
//! need the host's own description, C strings need access to the memory the
//! pointer refers to, and decimals format with the host's locale. The
//! [`Describer`] trait is the seam for all of these; every method has a
//! working default so a host only overrides what it actually knows.

use hashbrown::HashMap;

use super::decimal::Decimal;
use super::geometry::Range;
use super::types::ObjectKind;

/// Describe capabilities supplied by the host environment
pub trait Describer {
    /// Description of an object, class, selector or CF reference
    fn describe_object(&self, _kind: ObjectKind, _address: usize) -> Option<String> {
        None
    }

    /// Bytes of the NUL-terminated string at `address`, without the terminator
    fn read_c_string(&self, _address: usize) -> Option<Vec<u8>> {
        None
    }

    fn describe_range(&self, range: Range) -> String {
        format!("{{{}, {}}}", range.location, range.length)
    }

    /// Decimal separator of the current locale
    fn decimal_separator(&self) -> char {
        '.'
    }

    fn describe_decimal(&self, decimal: &Decimal) -> String {
        decimal.to_string_with_separator(self.decimal_separator())
    }
}

/// Host with no memory access and default descriptions
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl Describer for NoHost {}

/// Bounds-checked view of a byte slice mapped at a base address
///
/// Pointers decoded from a value are resolved against this view, the same
/// way a debugger resolves guest pointers into linear memory.
#[derive(Debug, Clone)]
pub struct LinearMemory<'a> {
    base: usize,
    data: &'a [u8],
    objects: HashMap<usize, String>,
    decimal_separator: char,
}

impl<'a> LinearMemory<'a> {
    /// Map `data` so that `data[0]` lives at address `base`
    pub fn new(base: usize, data: &'a [u8]) -> Self {
        Self {
            base,
            data,
            objects: HashMap::new(),
            decimal_separator: '.',
        }
    }

    /// Register a description for the reference at `address`
    pub fn with_object(mut self, address: usize, description: impl Into<String>) -> Self {
        self.objects.insert(address, description.into());
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Bytes from `address` to the end of the mapping
    fn tail(&self, address: usize) -> Option<&'a [u8]> {
        let offset = address.checked_sub(self.base)?;
        if offset >= self.data.len() {
            return None;
        }
        Some(&self.data[offset..])
    }
}

impl Describer for LinearMemory<'_> {
    fn describe_object(&self, _kind: ObjectKind, address: usize) -> Option<String> {
        self.objects.get(&address).cloned()
    }

    fn read_c_string(&self, address: usize) -> Option<Vec<u8>> {
        let Some(tail) = self.tail(address) else {
            tracing::warn!("debug: out of bounds string read at {:#x}", address);
            return None;
        };

        // Bounds check: the terminator must lie inside the mapping
        let Some(end) = tail.iter().position(|b| *b == 0) else {
            tracing::warn!("debug: unterminated string at {:#x}", address);
            return None;
        };

        Some(tail[..end].to_vec())
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

/// Host wrapper that overrides the decimal separator
///
/// Object descriptions, string reads and ranges still come from the wrapped
/// host; decimals render with `decimal_separator`.
#[derive(Debug, Clone, Copy)]
pub struct Localized<'a, D: ?Sized> {
    host: &'a D,
    decimal_separator: char,
}

impl<'a, D: Describer + ?Sized> Localized<'a, D> {
    pub fn new(host: &'a D, decimal_separator: char) -> Self {
        Self {
            host,
            decimal_separator,
        }
    }
}

impl<D: Describer + ?Sized> Describer for Localized<'_, D> {
    fn describe_object(&self, kind: ObjectKind, address: usize) -> Option<String> {
        self.host.describe_object(kind, address)
    }

    fn read_c_string(&self, address: usize) -> Option<Vec<u8>> {
        self.host.read_c_string(address)
    }

    fn describe_range(&self, range: Range) -> String {
        self.host.describe_range(range)
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_host_defaults() {
        assert_eq!(NoHost.describe_object(ObjectKind::Object, 0x10), None);
        assert_eq!(NoHost.read_c_string(0x10), None);
        assert_eq!(
            NoHost.describe_range(Range {
                location: 1,
                length: 2
            }),
            "{1, 2}"
        );
        assert_eq!(
            NoHost.describe_decimal(&Decimal::new(150, -1, false)),
            "15.0"
        );
    }

    #[test]
    fn test_linear_memory_strings() {
        let data = b"hello\0world\0tail";
        let memory = LinearMemory::new(0x1000, data);

        assert_eq!(memory.read_c_string(0x1000), Some(b"hello".to_vec()));
        assert_eq!(memory.read_c_string(0x1006), Some(b"world".to_vec()));
        assert_eq!(memory.read_c_string(0x1005), Some(Vec::new()));

        // Below the base, past the end, and unterminated
        assert_eq!(memory.read_c_string(0x0fff), None);
        assert_eq!(memory.read_c_string(0x1000 + data.len()), None);
        assert_eq!(memory.read_c_string(0x100c), None);
    }

    #[test]
    fn test_linear_memory_objects_and_locale() {
        let memory = LinearMemory::new(0, &[])
            .with_object(0x40, "<NSObject: 0x40>")
            .with_decimal_separator(',');

        assert_eq!(
            memory.describe_object(ObjectKind::Object, 0x40),
            Some("<NSObject: 0x40>".to_string())
        );
        assert_eq!(memory.describe_object(ObjectKind::Object, 0x48), None);
        assert_eq!(
            memory.describe_decimal(&Decimal::new(150, -1, false)),
            "15,0"
        );
    }

    #[test]
    fn test_localized_overrides_separator() {
        let memory = LinearMemory::new(0x10, b"abc\0")
            .with_object(0x80, "<Widget: 0x80>")
            .with_decimal_separator('.');
        let host = Localized::new(&memory, ',');

        assert_eq!(
            host.describe_decimal(&Decimal::new(1999, -2, false)),
            "19,99"
        );
        assert_eq!(host.read_c_string(0x10), Some(b"abc".to_vec()));
        assert_eq!(
            host.describe_object(ObjectKind::Object, 0x80),
            Some("<Widget: 0x80>".to_string())
        );

        let bare = Localized::new(&NoHost, ',');
        assert_eq!(bare.describe_decimal(&Decimal::new(5, 0, true)), "-5");
    }
}
