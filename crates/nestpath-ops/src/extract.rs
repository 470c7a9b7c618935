// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rebuild the minimal object that contains a single path.
//!
//! The walk descends through nested objects. The first array met on the way
//! is kept whole under its field name, since an object cannot hold an element
//! at its original index without its siblings. Scalars, `null`, and an
//! object at the final segment are kept under their field name. The kept
//! value is then re-wrapped under every parent segment, so it sits at its
//! original depth:
//!
//! ```
//! use nestpath_ops::create_obj;
//! use serde_json::json;
//!
//! let payload = json!({"profile": {"name": "Max", "age": 10}});
//! assert_eq!(create_obj(&payload, "profile.name"), json!({"profile": {"name": "Max"}}));
//! ```

use crate::lookup::{find_object_by_key, unresolved};
use nestpath_core::{NestError, Result, child, is_container, tokenize, type_name};
use serde_json::{Map, Value};

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

/// Extract `path` from `payload` into a new minimal object.
///
/// # Errors
///
/// Returns [`NestError::NotAContainer`] for scalar or `null` payloads and
/// [`NestError::UnresolvedPath`] when `path` does not resolve.
pub fn try_create_obj(payload: &Value, path: &str) -> Result<Value> {
    if !is_container(payload) {
        return Err(NestError::NotAContainer {
            found: type_name(payload),
        });
    }
    if !find_object_by_key(payload, &[path]) {
        return Err(unresolved(path));
    }

    let tokens = tokenize(path);
    let segments = tokens.segments();
    let last = segments.len() - 1;

    let mut current = payload;
    let mut kept = None;
    for (depth, segment) in segments.iter().enumerate() {
        let value = child(current, segment).ok_or_else(|| unresolved(path))?;
        if depth < last && value.is_object() {
            current = value;
            continue;
        }
        kept = Some((depth, single_entry(segment, value.clone())));
        break;
    }

    let (depth, leaf) = kept.ok_or_else(|| unresolved(path))?;
    Ok(segments[..depth]
        .iter()
        .rev()
        .fold(leaf, |inner, parent| single_entry(parent, inner)))
}

/// Extract `path` from `payload`, or an empty object when it does not
/// resolve.
#[must_use]
pub fn create_obj(payload: &Value, path: &str) -> Value {
    try_create_obj(payload, path).unwrap_or_else(|error| {
        tracing::trace!(%error, "nothing to extract");
        Value::Object(Map::new())
    })
}
