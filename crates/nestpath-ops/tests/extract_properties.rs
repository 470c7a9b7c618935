// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests for lookup, extraction and selection
#![allow(missing_docs)]

use nestpath_ops::{create_obj, find_object_by_key, resolve_str, select_object};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d]", arb_json(), 1..5)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// Every addressable path in `value`, using bracket syntax for indices
fn all_paths(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = vec![(String::new(), value)];
    while let Some((prefix, node)) = pending.pop() {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    out.push(path.clone());
                    pending.push((path, child));
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    let path = format!("{prefix}[{index}]");
                    out.push(path.clone());
                    pending.push((path, child));
                }
            }
            _ => {}
        }
    }
    out
}

/// Paths that walk through objects only and stop at the first value that is
/// not a non-empty object. No path is a prefix of another and none passes
/// through an array.
fn disjoint_object_paths(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = vec![(String::new(), value)];
    while let Some((prefix, node)) = pending.pop() {
        let Value::Object(map) = node else { continue };
        for (key, child) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match child {
                Value::Object(inner) if !inner.is_empty() => pending.push((path, child)),
                _ => out.push(path),
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn every_walked_path_resolves(payload in arb_object()) {
        for path in all_paths(&payload) {
            prop_assert!(find_object_by_key(&payload, &[path.as_str()]), "{}", path);
        }
    }

    #[test]
    fn extraction_keeps_value_at_path(payload in arb_object()) {
        for path in all_paths(&payload) {
            let extracted = create_obj(&payload, &path);
            prop_assert_eq!(
                resolve_str(&extracted, &path),
                resolve_str(&payload, &path),
                "path {}", path
            );
        }
    }

    #[test]
    fn selection_keeps_every_requested_value(payload in arb_object()) {
        let paths = disjoint_object_paths(&payload);
        let selected = select_object(&payload, &paths);
        for path in &paths {
            prop_assert_eq!(
                resolve_str(&selected, path),
                resolve_str(&payload, path),
                "path {}", path
            );
        }
    }

    #[test]
    fn selecting_a_path_twice_keeps_scalars(payload in arb_object()) {
        for path in disjoint_object_paths(&payload) {
            let value = resolve_str(&payload, &path);
            if value.is_some_and(|v| !v.is_array()) {
                let selected = select_object(&payload, &[path.as_str(), path.as_str()]);
                prop_assert_eq!(resolve_str(&selected, &path), value, "path {}", path);
            }
        }
    }

    #[test]
    fn missing_key_never_resolves(payload in arb_object()) {
        prop_assert!(!find_object_by_key(&payload, &["zz"]));
        prop_assert_eq!(create_obj(&payload, "zz"), Value::Object(Map::new()));
    }
}
