// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and foundational helpers for nestpath
//!
//! This crate provides the foundational types used across the nestpath crates:
//!
//! - [`error`] - Error types and Result alias
//! - [`path`] - Dot/bracket path tokenization
//! - [`value`] - Segment lookup and comparison helpers over `serde_json::Value`
//! - [`diagnostics`] - Pluggable sinks for handled errors

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Pluggable diagnostic sinks
pub mod diagnostics;
/// Error types for nestpath operations
pub mod error;
/// Path tokenization
pub mod path;
/// Value helpers for loosely-typed nested data
pub mod value;

// Re-exports for convenience
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use error::{NestError, Result};
pub use path::{Path, tokenize};
pub use value::{check_object, child, is_container, map_array, to_convert_data, type_name};
