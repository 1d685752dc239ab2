//! Typecode Core - descriptor-directed value formatting
//!
//! Renders arbitrary runtime values for diagnostic logging from a compact
//! type descriptor and the value's raw bytes.
//!
//! # Architecture
//!
//! - [`debug::Catalog`] - ordered descriptor rules, first match wins
//! - [`debug::decode`] - size-checked buffer decoding into [`debug::Value`]
//! - [`debug::Describer`] - host collaborator for objects, strings and locale
//! - [`config`] - TOML settings for locale and expression logging

pub mod config;
pub mod debug;

// Re-export the dispatcher entry points
pub use debug::{Catalog, Describer, Kind, render, render_with, try_render_with};
