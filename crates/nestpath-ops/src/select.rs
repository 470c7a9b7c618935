// SPDX-License-Identifier: MIT OR Apache-2.0
//! Build a sub-object holding only the requested paths.

use crate::extract::create_obj;
use crate::lookup::find_object_by_key;
use nestpath_core::is_container;
use nestpath_merge::merge_object;
use serde_json::{Map, Value};

/// Select `paths` from `payload` into one deep-merged object.
///
/// Paths that do not resolve are skipped. Each resolvable path is extracted
/// with [`create_obj`] and every extraction is deep merged in order, so two
/// paths into the same array concatenate that array with itself. Scalar and
/// `null` payloads, and selections where nothing resolves, yield an empty
/// object.
///
/// ```
/// use nestpath_ops::select_object;
/// use serde_json::json;
///
/// let payload = json!({"name": "a", "color": "red", "profile": {"name": "Max", "age": 3}});
/// assert_eq!(
///     select_object(&payload, &["color", "profile.name"]),
///     json!({"color": "red", "profile": {"name": "Max"}})
/// );
/// ```
#[must_use]
pub fn select_object<S: AsRef<str>>(payload: &Value, paths: &[S]) -> Value {
    if !is_container(payload) {
        return Value::Object(Map::new());
    }

    let mut partials: Vec<Value> = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        if !find_object_by_key(payload, &[path]) {
            continue;
        }
        partials.push(create_obj(payload, path));
    }

    if partials.is_empty() {
        return Value::Object(Map::new());
    }
    merge_object(&partials)
}
