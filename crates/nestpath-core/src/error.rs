// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for nestpath operations.
//!
//! The public helpers fail soft (returning `false` or an empty object), so
//! these errors only surface through the fallible `try_*` entry points and
//! through [`crate::DiagnosticSink`] reports.

use thiserror::Error;

/// Errors raised while probing, extracting or merging nested values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestError {
    /// A merge was requested with nothing to merge
    #[error("at least one object is required")]
    NoMergeInputs,

    /// The path does not resolve to a defined value
    #[error("path '{path}' does not resolve to a value")]
    UnresolvedPath {
        /// The path as given by the caller
        path: String,
    },

    /// The payload is a scalar or null where an object or array was required
    #[error("expected an object or array, found {found}")]
    NotAContainer {
        /// JSON type name of the payload
        found: &'static str,
    },
}

/// Result type alias for nestpath operations
pub type Result<T> = std::result::Result<T, NestError>;
