// SPDX-License-Identifier: MIT OR Apache-2.0
//! Resolve dot/bracket paths against nested values.

use nestpath_core::{NestError, Path, Result, child, is_container, tokenize, type_name};
use serde_json::Value;

/// Walk `path` from `payload`, returning the value it addresses.
///
/// The empty path addresses `payload` itself.
#[must_use]
pub fn resolve<'a>(payload: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload, |current, segment| child(current, segment))
}

/// Tokenize `path` and resolve it
#[must_use]
pub fn resolve_str<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    resolve(payload, &tokenize(path))
}

/// Resolve `path`, explaining why it failed.
///
/// # Errors
///
/// Returns [`NestError::NotAContainer`] when `payload` is neither an object
/// nor an array, and [`NestError::UnresolvedPath`] when `path` is empty after
/// tokenization or any segment is missing.
pub fn try_resolve<'a>(payload: &'a Value, path: &str) -> Result<&'a Value> {
    if !is_container(payload) {
        return Err(NestError::NotAContainer {
            found: type_name(payload),
        });
    }
    let tokens = tokenize(path);
    if tokens.is_empty() {
        return Err(unresolved(path));
    }
    resolve(payload, &tokens).ok_or_else(|| unresolved(path))
}

pub(crate) fn unresolved(path: &str) -> NestError {
    NestError::UnresolvedPath {
        path: path.to_owned(),
    }
}

/// True when every path resolves to a defined value in `payload`.
///
/// `null` counts as defined; only missing keys and out-of-range indices
/// fail. Paths are checked independently and the outcomes combined with
/// AND, stopping at the first failure. Paths that tokenize to nothing (such
/// as `""` or `"length"`) are ignored, and a list with no remaining paths
/// yields `false`. Scalar and `null` payloads always yield `false`.
///
/// ```
/// use nestpath_ops::find_object_by_key;
/// use serde_json::json;
///
/// let payload = json!({"saleOrderItems": [{"id": 1}], "profile": {"name": "Max"}});
/// assert!(find_object_by_key(&payload, &["saleOrderItems[0]", "profile.name"]));
/// assert!(!find_object_by_key(&payload, &["profile.age"]));
/// ```
#[must_use]
pub fn find_object_by_key<S: AsRef<str>>(payload: &Value, paths: &[S]) -> bool {
    if !is_container(payload) {
        return false;
    }

    let mut checked = false;
    for raw in paths {
        let path = tokenize(raw.as_ref());
        if path.is_empty() {
            continue;
        }
        if resolve(payload, &path).is_none() {
            tracing::trace!(path = raw.as_ref(), "path does not resolve");
            return false;
        }
        checked = true;
    }
    checked
}
