// SPDX-License-Identifier: MIT OR Apache-2.0
//! Decoding of rule sets and numeric keys given on the command line.

use crate::io::{parse_json, read_input};
use anyhow::{Result, bail};
use nestpath_core::{Path, type_name};
use nestpath_ops::{payload_by_max, payload_by_min, resolve};
use serde_json::{Map, Value};

/// Which extremal element to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Greatest key
    Max,
    /// Smallest key
    Min,
}

/// Parse a rule set given inline as JSON or as `@FILE`
///
/// # Errors
///
/// Fails when the file cannot be read, the text is not JSON, or the JSON is
/// not an object.
pub fn parse_rules(arg: &str) -> Result<Map<String, Value>> {
    let value = if let Some(file) = arg.strip_prefix('@') {
        let text = read_input(Some(std::path::Path::new(file)))?;
        parse_json(&text, file)?
    } else {
        parse_json(arg, "--rules")?
    };
    match value {
        Value::Object(rules) => Ok(rules),
        other => bail!("rules must be a JSON object, found {}", type_name(&other)),
    }
}

/// Number found at `path` inside `item`
#[must_use]
pub fn numeric_key(item: &Value, path: &Path) -> Option<f64> {
    resolve(item, path).and_then(Value::as_f64)
}

/// Pick the element of the array `payload` with the extremal number at `path`.
///
/// Elements without a number at `path` are skipped. Returns `None` when no
/// element has one.
///
/// # Errors
///
/// Fails when `payload` is not an array.
pub fn extremum_by_path(payload: &Value, path: &str, pick: Extremum) -> Result<Option<Value>> {
    let Value::Array(items) = payload else {
        bail!("expected a JSON array, found {}", type_name(payload));
    };
    let key_path = Path::parse(path);
    let keyed: Vec<(f64, &Value)> = items
        .iter()
        .filter_map(|item| numeric_key(item, &key_path).map(|key| (key, item)))
        .collect();

    let best = match pick {
        Extremum::Max => payload_by_max(&keyed, |entry| entry.0),
        Extremum::Min => payload_by_min(&keyed, |entry| entry.0),
    };
    Ok(best.map(|(_, item)| (*item).clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_inline_rules() {
        let rules = parse_rules(r#"{"name": "Max", "tags": [1]}"#).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules["name"], "Max");
    }

    #[test]
    fn test_parse_rules_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rules.json");
        std::fs::write(&file, r#"{"price": 3500}"#).unwrap();
        let rules = parse_rules(&format!("@{}", file.display())).unwrap();
        assert_eq!(rules["price"], 3500);
    }

    #[test]
    fn test_rules_must_be_object() {
        let err = parse_rules("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("found array"));
        assert!(parse_rules("{").is_err());
    }

    #[test]
    fn test_extremum_by_nested_path() {
        let orders = json!([
            {"id": 1, "amount": {"total": 5}},
            {"id": 2, "amount": {"total": 9}},
            {"id": 3, "amount": {}},
            {"id": 4, "amount": {"total": 2}}
        ]);
        let max = extremum_by_path(&orders, "amount.total", Extremum::Max).unwrap();
        assert_eq!(max.unwrap()["id"], 2);
        let min = extremum_by_path(&orders, "amount.total", Extremum::Min).unwrap();
        assert_eq!(min.unwrap()["id"], 4);
    }

    #[test]
    fn test_extremum_without_keys() {
        let items = json!([{"a": "x"}, {"b": 1}]);
        assert_eq!(extremum_by_path(&items, "a", Extremum::Max).unwrap(), None);
        assert_eq!(extremum_by_path(&json!([]), "a", Extremum::Min).unwrap(), None);
    }

    #[test]
    fn test_extremum_requires_array() {
        let err = extremum_by_path(&json!({"a": 1}), "a", Extremum::Max).unwrap_err();
        assert!(err.to_string().contains("found object"));
    }
}
