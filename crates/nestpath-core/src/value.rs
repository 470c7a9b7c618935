// SPDX-License-Identifier: MIT OR Apache-2.0
//! Helpers for walking and comparing loosely-typed `serde_json::Value` trees.

use serde_json::{Map, Value};
use std::fmt::Write;

/// Look up one path segment in a value.
///
/// Object keys and array indices are addressed uniformly by string: objects
/// look the segment up as a key, arrays parse it as a decimal index. Scalars
/// and `null` have no children. An explicit `null` child is returned as
/// `Some(&Value::Null)`; only a missing child is `None`.
#[must_use]
pub fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Canonical decimal array index: digits only, no leading zeros
fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}

/// True for objects and arrays
#[must_use]
pub const fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// True iff the value is a plain object (not an array, not null)
#[must_use]
pub const fn check_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Normalize a value into a list: an array yields its elements, anything
/// else yields itself as the only element.
#[must_use]
pub fn map_array(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// JSON type name used in diagnostics
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Canonical comparable form of a value.
///
/// Compact JSON with object keys sorted at every depth, so two objects that
/// differ only in key order produce the same string. Only key order is
/// ignored: arrays keep their element order, so `[1, 2]` and `[2, 1]` differ.
#[must_use]
pub fn to_convert_data(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => write_canonical_object(map, out),
        // Display on a scalar Value is its compact JSON form
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

fn write_canonical_object(map: &Map<String, Value>, out: &mut String) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}:", Value::String(key.clone()));
        write_canonical(value, out);
    }
    out.push('}');
}
