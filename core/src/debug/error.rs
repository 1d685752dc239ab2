//! Formatter error types

/// Buffer did not hold enough bytes for the matched kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("buffer too short for {kind}: need {expected} bytes, got {actual}")]
pub struct DecodeError {
    pub kind: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Why a descriptor/buffer pair produced no rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Descriptor is not in the catalog and matches no structural pattern
    #[error("unrecognized type descriptor {0:?}")]
    Unrecognized(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
