//! Format rule catalog and dispatcher
//!
//! The catalog is an ordered, static list of rules. A descriptor is tested
//! against each rule top to bottom and the first match decides the kind, so
//! rule order is part of the observable behavior: exact literals come first,
//! then the character-array shape, then the anonymous two-double struct.


use super::decode::decode;
use super::describe::{Describer, NoHost};
use super::descriptor as desc;
use super::error::FormatError;
use super::types::Kind;

/// A single matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Exact descriptor equality
    Literal {
        descriptor: &'static str,
        kind: Kind,
    },
    /// Any `[<N>c]` descriptor, resolving to `Kind::CharArray(N)`
    CharArray,
}

impl FormatRule {
    pub const fn literal(descriptor: &'static str, kind: Kind) -> Self {
        FormatRule::Literal { descriptor, kind }
    }

    /// Kind this rule resolves `descriptor` to, if it matches
    pub fn matches(&self, descriptor: &str) -> Option<Kind> {
        match self {
            FormatRule::Literal {
                descriptor: literal,
                kind,
            } => (*literal == descriptor).then_some(*kind),
            FormatRule::CharArray => desc::char_array_len(descriptor).map(Kind::CharArray),
        }
    }

    /// Descriptor text for listings
    pub fn pattern(&self) -> &'static str {
        match self {
            FormatRule::Literal { descriptor, .. } => *descriptor,
            FormatRule::CharArray => "[<N>c]",
        }
    }

    /// Kind name for listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            FormatRule::Literal { kind, .. } => kind.name(),
            FormatRule::CharArray => Kind::CharArray(0).name(),
        }
    }
}

/// The standard rule list, in priority order
pub static STANDARD_RULES: [FormatRule; 27] = [
    // Geometry
    FormatRule::literal(desc::POINT, Kind::Point),
    FormatRule::literal(desc::SIZE, Kind::Size),
    FormatRule::literal(desc::RECT, Kind::Rect),
    FormatRule::literal(desc::EDGE_INSETS, Kind::EdgeInsets),
    FormatRule::literal(desc::RANGE, Kind::Range),
    FormatRule::literal(desc::CLASS, Kind::Class),
    FormatRule::literal(desc::SELECTOR, Kind::Selector),
    FormatRule::literal(desc::BOOL, Kind::BoolOrChar),
    FormatRule::literal(desc::DECIMAL, Kind::Decimal),
    // CF references are toll-free bridged objects
    FormatRule::literal(desc::CF_STRING, Kind::CfString),
    FormatRule::literal(desc::CF_ARRAY, Kind::CfArray),
    FormatRule::literal(desc::FOUR_CHAR_CODE, Kind::FourCharCode),
    FormatRule::literal(desc::I64, Kind::I64),
    FormatRule::literal(desc::U64, Kind::U64),
    FormatRule::literal(desc::F32, Kind::F32),
    FormatRule::literal(desc::F64, Kind::F64),
    FormatRule::literal(desc::OBJECT, Kind::Object),
    FormatRule::literal(desc::I16, Kind::I16),
    FormatRule::literal(desc::U16, Kind::U16),
    FormatRule::literal(desc::I32, Kind::I32),
    // Never reached: FOUR_CHAR_CODE above claims "I"
    FormatRule::literal(desc::U32, Kind::U32),
    FormatRule::literal(desc::LONG_DOUBLE, Kind::LongDouble),
    FormatRule::literal(desc::C_STRING, Kind::CString),
    FormatRule::literal(desc::CONST_C_STRING, Kind::ConstCString),
    FormatRule::literal(desc::POINTER, Kind::Pointer),
    // Structural
    FormatRule::CharArray,
    FormatRule::literal(desc::COORDINATE, Kind::Coordinate),
];

/// Ordered, immutable rule list
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    rules: &'static [FormatRule],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub const fn new(rules: &'static [FormatRule]) -> Self {
        Self { rules }
    }

    /// Catalog over [`STANDARD_RULES`]
    pub fn standard() -> Self {
        Self::new(&STANDARD_RULES)
    }

    pub fn rules(&self) -> &'static [FormatRule] {
        self.rules
    }

    /// Resolve a descriptor to a kind; the first matching rule wins
    pub fn find(&self, descriptor: &str) -> Option<Kind> {
        self.rules.iter().find_map(|rule| rule.matches(descriptor))
    }

    /// Render `data` as described by `descriptor`, reporting why nothing was produced
    pub fn try_render_with<D: Describer + ?Sized>(
        &self,
        descriptor: &str,
        data: &[u8],
        host: &D,
    ) -> Result<String, FormatError> {
        let kind = self
            .find(descriptor)
            .ok_or_else(|| FormatError::Unrecognized(descriptor.to_string()))?;
        let value = decode(kind, data)?;
        Ok(value.render(host))
    }

    /// Render `data` as described by `descriptor`
    ///
    /// Returns `None` for descriptors outside the catalog, and for buffers too
    /// short for the matched kind (logged as a warning).
    pub fn render_with<D: Describer + ?Sized>(
        &self,
        descriptor: &str,
        data: &[u8],
        host: &D,
    ) -> Option<String> {
        match self.try_render_with(descriptor, data, host) {
            Ok(text) => Some(text),
            Err(FormatError::Unrecognized(_)) => None,
            Err(FormatError::Decode(err)) => {
                tracing::warn!("debug: {} (descriptor {:?})", err, descriptor);
                None
            }
        }
    }
}

/// Render with the standard catalog and no host memory
pub fn render(descriptor: &str, data: &[u8]) -> Option<String> {
    Catalog::standard().render_with(descriptor, data, &NoHost)
}

/// Render with the standard catalog and the given host
pub fn render_with<D: Describer + ?Sized>(
    descriptor: &str,
    data: &[u8],
    host: &D,
) -> Option<String> {
    Catalog::standard().render_with(descriptor, data, host)
}

/// Render with the standard catalog, reporting why nothing was produced
pub fn try_render_with<D: Describer + ?Sized>(
    descriptor: &str,
    data: &[u8],
    host: &D,
) -> Result<String, FormatError> {
    Catalog::standard().try_render_with(descriptor, data, host)
}
