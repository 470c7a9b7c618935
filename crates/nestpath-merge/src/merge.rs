// SPDX-License-Identifier: MIT OR Apache-2.0
//! Left-to-right deep merge.

use nestpath_core::{Diagnostic, DiagnosticSink, NestError, Result, TracingSink};
use serde_json::{Map, Value};

const OPERATION: &str = "merge_object";

/// Merge `incoming` into `target` in place.
///
/// Both-array keys are concatenated, both-object keys are merged
/// recursively, and every other key is overwritten by `incoming`. Array
/// elements of an incoming array are spliced in one level deep, so
/// `[1]` followed by `[[2], 3]` gives `[1, 2, 3]`.
pub fn merge_into(target: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        if let Some(existing) = target.get_mut(key) {
            match (existing, value) {
                (Value::Array(existing), Value::Array(appended)) => {
                    append_flattened(existing, appended);
                    continue;
                }
                (Value::Object(existing), Value::Object(nested)) => {
                    merge_into(existing, nested);
                    continue;
                }
                _ => {}
            }
        }
        target.insert(key.clone(), value.clone());
    }
}

fn append_flattened(target: &mut Vec<Value>, appended: &[Value]) {
    for value in appended {
        match value {
            Value::Array(items) => target.extend(items.iter().cloned()),
            other => target.push(other.clone()),
        }
    }
}

/// Deep merge two values into a new object.
///
/// Non-object arguments contribute nothing.
#[must_use]
pub fn merge_pair(base: &Value, overlay: &Value) -> Value {
    let mut result = Map::new();
    for value in [base, overlay] {
        if let Value::Object(map) = value {
            merge_into(&mut result, map);
        }
    }
    Value::Object(result)
}

/// Deep merge every value yielded by `objects`, left to right.
///
/// # Errors
///
/// Returns [`NestError::NoMergeInputs`] when the iterator is empty.
pub fn try_merge_iter<'a, I>(objects: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut result = Map::new();
    let mut seen = 0usize;
    for value in objects {
        seen += 1;
        if let Value::Object(map) = value {
            merge_into(&mut result, map);
        }
    }
    if seen == 0 {
        return Err(NestError::NoMergeInputs);
    }
    tracing::trace!(inputs = seen, keys = result.len(), "merged objects");
    Ok(Value::Object(result))
}

/// Deep merge a slice of values, left to right.
///
/// # Errors
///
/// Returns [`NestError::NoMergeInputs`] when `objects` is empty.
pub fn try_merge_object(objects: &[Value]) -> Result<Value> {
    try_merge_iter(objects)
}

/// Deep merge, reporting handled errors to `sink`.
///
/// An empty input is reported as [`NestError::NoMergeInputs`] and yields an
/// empty object.
#[must_use]
pub fn merge_object_with_sink(objects: &[Value], sink: &dyn DiagnosticSink) -> Value {
    try_merge_object(objects).unwrap_or_else(|error| {
        sink.report(&Diagnostic::new(OPERATION, error));
        Value::Object(Map::new())
    })
}

/// Deep merge, logging handled errors through `tracing`.
///
/// Always returns an object; see [`merge_object_with_sink`].
#[must_use]
pub fn merge_object(objects: &[Value]) -> Value {
    merge_object_with_sink(objects, &TracingSink)
}
