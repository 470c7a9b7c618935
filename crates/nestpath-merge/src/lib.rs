// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Deep merge for nested JSON objects
//!
//! Folds any number of objects, left to right, into a single new object:
//!
//! - Objects present on both sides are merged recursively
//! - Arrays present on both sides are concatenated (existing, then incoming),
//!   with array elements of the incoming array spliced in one level deep
//! - Anything else is overwritten by the later value
//! - Non-object inputs are skipped
//!
//! Unlike RFC 7396 merge patch, `null` is an ordinary value and overwrites
//! like any other scalar.
//!
//! ```
//! use nestpath_merge::merge_object;
//! use serde_json::json;
//!
//! let merged = merge_object(&[
//!     json!({"name": "a", "profile": {"color": "red"}, "tags": [1]}),
//!     json!({"profile": {"email": "email"}, "tags": [2]}),
//! ]);
//! assert_eq!(
//!     merged,
//!     json!({"name": "a", "profile": {"color": "red", "email": "email"}, "tags": [1, 2]})
//! );
//! ```

mod merge;

pub use merge::{
    merge_into, merge_object, merge_object_with_sink, merge_pair, try_merge_iter,
    try_merge_object,
};
