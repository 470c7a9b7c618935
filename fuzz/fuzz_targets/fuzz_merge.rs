#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for deep merge.
//!
//! The input is split on NUL bytes and each chunk parsed as JSON.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_merge

use libfuzzer_sys::fuzz_target;
use nestpath_merge::{merge_object, try_merge_object};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let inputs: Vec<Value> = data
        .split(|b| *b == 0)
        .filter_map(|chunk| serde_json::from_slice(chunk).ok())
        .collect();

    let merged = merge_object(&inputs);
    assert!(merged.is_object());

    let objects: Vec<&serde_json::Map<String, Value>> =
        inputs.iter().filter_map(Value::as_object).collect();
    let merged = merged.as_object().map(|m| m.len()).unwrap_or(0);
    for object in &objects {
        assert!(object.len() <= merged);
    }

    assert_eq!(try_merge_object(&inputs).is_err(), inputs.is_empty());
});
