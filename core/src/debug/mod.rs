//! Type-descriptor-directed value formatter
//!
//! Turns a `(descriptor, bytes)` pair into display text for diagnostic
//! logging, with no compile-time knowledge of the value's type.
//!
//! # Overview
//!
//! - [`Catalog`] - ordered rule list mapping descriptors to a [`Kind`]
//! - [`decode`] - size-checked reinterpretation of a buffer as a [`Value`]
//! - [`Value::render`] - fixed textual template per kind
//! - [`Describer`] - host capabilities (object descriptions, string memory, locale)
//!
//! # Usage
//!
//! ```rust
//! use typecode_core::debug::{Coordinate, render};
//!
//! let coordinate = Coordinate::new(37.5, -122.2);
//! let text = render("{?=dd}", bytemuck::bytes_of(&coordinate));
//! assert_eq!(text.as_deref(), Some("{latitude=37.5,longitude=-122.2}"));
//!
//! // Unknown descriptors are not an error, just absent
//! assert_eq!(render("v", &[]), None);
//! ```
//!
//! # Matching order
//!
//! The first matching rule wins. Exact literals are tried first, then the
//! `[<N>c]` character-array shape, then the anonymous two-double struct
//! `{?=dd}`. Reordering rules changes output.

pub mod catalog;
pub mod decimal;
pub mod decode;
pub mod describe;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod format;
pub mod geometry;
pub mod log;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, FormatRule, STANDARD_RULES, render, render_with, try_render_with};
pub use decimal::Decimal;
pub use decode::decode;
pub use describe::{Describer, LinearMemory, Localized, NoHost};
pub use encode::{CStringPtr, Encode, ObjectPtr};
pub use error::{DecodeError, FormatError};
pub use geometry::{Coordinate, EdgeInsets, Point, Range, Rect, Size};
pub use log::{CallSite, log_expr, log_expr_with, log_function};
pub use types::{Kind, LONG_DOUBLE_FORMAT, LongDoubleFormat, ObjectKind, Value};
