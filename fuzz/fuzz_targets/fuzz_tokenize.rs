#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for path tokenization.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_tokenize

use libfuzzer_sys::fuzz_target;
use nestpath_core::{Path, tokenize};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let path = tokenize(input);
    for segment in &path {
        assert!(!segment.is_empty());
        assert_ne!(segment, "length");
        assert!(!segment.contains('.'));
    }

    // Bracket-free segments rejoined with dots tokenize back to themselves
    if path.iter().all(|segment| !segment.contains(['[', ']'])) {
        assert_eq!(Path::parse(&path.to_string()), path);
    }
});
