#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for lookup, extraction and selection.
//!
//! The first line of the input is a path, the rest a JSON payload.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_select

use libfuzzer_sys::fuzz_target;
use nestpath_ops::{check_nested_value, create_obj, find_object_by_key, resolve_str, select_object};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Some((path, body)) = input.split_once('\n') else {
        return;
    };
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return;
    };

    let found = find_object_by_key(&payload, &[path]);
    let extracted = create_obj(&payload, path);
    if found {
        assert_eq!(resolve_str(&extracted, path), resolve_str(&payload, path));
    } else {
        assert_eq!(extracted, Value::Object(serde_json::Map::new()));
    }

    let selected = select_object(&payload, &[path]);
    assert!(selected.is_object());
    if found {
        assert_eq!(resolve_str(&selected, path), resolve_str(&payload, path));
    }

    if let Some(rules) = payload.as_object() {
        let _ = check_nested_value(&payload, rules);
    }
});
