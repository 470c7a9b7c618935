// SPDX-License-Identifier: MIT OR Apache-2.0
//! # nestpath-cli
//!
//! Command-line interface for nestpath - probe, select, match and deep merge
//! nested JSON from the shell.
//!
//! ## Installation
//!
//! ```bash
//! cargo install nestpath-cli
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Tokenize a path
//! nestpath keys 'profile.name.colors[2].length'
//!
//! # Check that paths resolve (exit status 1 when they do not)
//! nestpath exists profile.name 'orders[0]' -f data.json
//!
//! # Deep merge files (arrays concatenate, objects merge, scalars overwrite)
//! nestpath merge base.json overlay.json
//!
//! # Extract or select paths into a minimal object
//! nestpath extract profile.name -f data.json
//! nestpath select name profile.color -f data.json
//!
//! # Probe for rule keys at any depth
//! nestpath match --rules '{"name": "Max"}' -f data.json
//! nestpath match --rules @rules.json -f data.json
//!
//! # Highest / lowest element of an array by a numeric path
//! nestpath max total -f orders.json
//! nestpath min total -f orders.json
//! ```
//!
//! Input is read from stdin when no file is given. `RUST_LOG` controls log
//! output on stderr; `-v` raises the default level.
//!
//! ## Library Usage
//!
//! For programmatic access use the library crates directly:
//!
//! - [`nestpath`](https://docs.rs/nestpath) - Umbrella crate
//! - [`nestpath-ops`](https://docs.rs/nestpath-ops) - Lookup, extraction, selection, matching
//! - [`nestpath-merge`](https://docs.rs/nestpath-merge) - Deep merge
//! - [`nestpath-core`](https://docs.rs/nestpath-core) - Core types

#![doc(html_root_url = "https://docs.rs/nestpath-cli/0.1.0")]
#![warn(missing_docs)]

/// Input and output helpers
pub mod io;
/// Argument decoding for the probe subcommands
pub mod probe;

/// Re-export of nestpath-core for core types.
pub use nestpath_core as core;

/// Re-export of nestpath-merge for deep merge.
pub use nestpath_merge as merge;

/// Re-export of nestpath-ops for path operations.
pub use nestpath_ops as ops;
