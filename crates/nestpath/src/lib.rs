// SPDX-License-Identifier: MIT OR Apache-2.0
//! # nestpath
//!
//! Navigate, compare, select and deep merge loosely-typed nested JSON.
//!
//! Paths use dot/bracket syntax (`profile.colors[2]`). Every helper borrows
//! its input, returns new values, and fails soft: an unresolvable path gives
//! `false` or an empty object instead of an error.
//!
//! ```
//! use nestpath::{check_nested_value, merge_object, select_object};
//! use serde_json::json;
//!
//! let user = json!({"name": "a", "profile": {"color": "red", "email": "e"}});
//! assert_eq!(
//!     select_object(&user, &["profile.color"]),
//!     json!({"profile": {"color": "red"}})
//! );
//!
//! let merged = merge_object(&[json!({"tags": [1]}), json!({"tags": [2], "x": 1})]);
//! assert_eq!(merged, json!({"tags": [1, 2], "x": 1}));
//!
//! assert!(check_nested_value(&user, json!({"email": "e"}).as_object().unwrap()));
//! ```
//!
//! The constituent crates can be used directly:
//!
//! - [`core`] - `Path`, errors, value helpers and diagnostic sinks
//! - [`merge`] - deep merge
//! - [`ops`] - lookup, extraction, selection, matching and extremum helpers

#![doc(html_root_url = "https://docs.rs/nestpath/0.1.0")]
#![warn(missing_docs)]

/// Re-export of nestpath-core for core types.
pub use nestpath_core as core;

/// Re-export of nestpath-merge for deep merge.
pub use nestpath_merge as merge;

/// Re-export of nestpath-ops for path operations.
pub use nestpath_ops as ops;

pub use nestpath_core::{
    CollectingSink, Diagnostic, DiagnosticSink, NestError, NullSink, Path, Result, TracingSink,
    check_object, map_array, to_convert_data, tokenize,
};
pub use nestpath_merge::{merge_object, merge_object_with_sink, try_merge_object};
pub use nestpath_ops::{
    MatchReport, check_nested_report, check_nested_value, create_obj, find_object_by_key,
    payload_by_max, payload_by_min, resolve, select_object, try_create_obj,
};

/// Tokenize a dot/bracket path into its segments.
///
/// ```
/// assert_eq!(
///     nestpath::map_to_keys("profile.name.colors[2].length"),
///     ["profile", "name", "colors", "2"]
/// );
/// ```
#[must_use]
pub fn map_to_keys(path: &str) -> Vec<String> {
    tokenize(path).to_vec()
}
