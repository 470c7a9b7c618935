// SPDX-License-Identifier: MIT OR Apache-2.0
//! Operations over nested JSON for nestpath
//!
//! Every operation is a pure function over borrowed `serde_json::Value`
//! input and fails soft, returning `false`, `None` or an empty object:
//!
//! - [`lookup`] - Check that dot/bracket paths resolve
//! - [`extract`] - Rebuild the minimal object containing one path
//! - [`select`] - Merge the extractions of several paths
//! - [`matcher`] - Probe a structure for rule keys at any depth
//! - [`extremum`] - Maximum and minimum by a derived key

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Minimal-object extraction for a single path
pub mod extract;
/// Extremal elements by derived key
pub mod extremum;
/// Path resolution
pub mod lookup;
/// Rule matching at any depth
pub mod matcher;
/// Multi-path selection
pub mod select;

pub use extract::{create_obj, try_create_obj};
pub use extremum::{payload_by_max, payload_by_min};
pub use lookup::{find_object_by_key, resolve, resolve_str, try_resolve};
pub use matcher::{MatchReport, check_nested_report, check_nested_value};
pub use select::select_object;
