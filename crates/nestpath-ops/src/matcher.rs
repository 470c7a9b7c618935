// SPDX-License-Identifier: MIT OR Apache-2.0
//! Probe a nested structure for rule keys at any depth.
//!
//! Every node of the content is visited in pre-order: the root first, then
//! array elements by index and object values in `Map` iteration order
//! (sorted by key unless serde_json's `preserve_order` is enabled). The
//! counts do not depend on that order. At each node, every
//! rule key is looked up as a field of that node and compared with the rule
//! value:
//!
//! - both containers (array or object): canonical-string equality
//! - otherwise: strict equality, where an absent field matches nothing
//!
//! One outcome is counted per (node, rule) pair and the content matches when
//! the number of successful comparisons equals the number of rules. Rules may
//! therefore be satisfied by different nodes at different depths. A rule
//! that matches at two nodes pushes the count past the rule total and the
//! content no longer matches.
//!
//! The walk uses an explicit stack, so depth is bounded by memory only.

use nestpath_core::{child, is_container, to_convert_data};
use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::{SmallVec, smallvec};

/// Counted outcome of a nested rule probe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Number of rules in the rule set
    pub rules: usize,
    /// Number of (node, rule) comparisons made
    pub compared: usize,
    /// Number of comparisons that succeeded
    pub matched: usize,
}

impl MatchReport {
    /// True when the successful comparisons equal the rule count
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.matched == self.rules
    }
}

fn field_matches(field: Option<&Value>, expected: &Value) -> bool {
    match field {
        Some(actual) if is_container(actual) && is_container(expected) => {
            to_convert_data(actual) == to_convert_data(expected)
        }
        Some(actual) => actual == expected,
        None => false,
    }
}

/// Visit every node of `content` and count rule comparisons
#[must_use]
pub fn check_nested_report(content: &Value, rules: &Map<String, Value>) -> MatchReport {
    let mut report = MatchReport {
        rules: rules.len(),
        ..MatchReport::default()
    };

    let mut pending: SmallVec<[&Value; 32]> = smallvec![content];
    while let Some(node) = pending.pop() {
        for (key, expected) in rules {
            report.compared += 1;
            if field_matches(child(node, key), expected) {
                report.matched += 1;
            }
        }

        // Reverse push keeps iteration order on pop
        match node {
            Value::Object(map) => pending.extend(map.values().rev()),
            Value::Array(items) => pending.extend(items.iter().rev()),
            _ => {}
        }
    }

    tracing::trace!(
        rules = report.rules,
        compared = report.compared,
        matched = report.matched,
        "nested rule probe"
    );
    report
}

/// True when every rule is satisfied somewhere in `content`.
///
/// ```
/// use nestpath_ops::check_nested_value;
/// use serde_json::json;
///
/// let content = json!({"colors": ["red", "blue"], "name": "Max"});
/// let rules = json!({"name": "Max"});
/// assert!(check_nested_value(&content, rules.as_object().unwrap()));
/// ```
#[must_use]
pub fn check_nested_value(content: &Value, rules: &Map<String, Value>) -> bool {
    check_nested_report(content, rules).is_match()
}
