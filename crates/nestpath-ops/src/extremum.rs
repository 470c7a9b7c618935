// SPDX-License-Identifier: MIT OR Apache-2.0
//! Maximum and minimum elements by a derived key.

use std::cmp::Ordering;

fn payload_by<T, K, F>(items: &[T], mut key: F, wanted: Ordering) -> Option<&T>
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let (first, rest) = items.split_first()?;
    let mut best = first;
    let mut best_key = key(first);
    for item in rest {
        let candidate = key(item);
        if candidate.partial_cmp(&best_key) == Some(wanted) {
            best = item;
            best_key = candidate;
        }
    }
    Some(best)
}

/// Element with the greatest key, or `None` for an empty slice.
///
/// Only a strictly greater key replaces the current best, so ties and
/// incomparable keys (such as `NaN`) keep the earliest element.
///
/// ```
/// use nestpath_ops::payload_by_max;
///
/// let items = [("a", 1), ("b", 5), ("c", 3)];
/// assert_eq!(payload_by_max(&items, |item| item.1), Some(&("b", 5)));
/// ```
#[must_use]
pub fn payload_by_max<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    payload_by(items, key, Ordering::Greater)
}

/// Element with the smallest key, or `None` for an empty slice.
///
/// The dual of [`payload_by_max`]: only a strictly smaller key replaces the
/// current best.
#[must_use]
pub fn payload_by_min<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    payload_by(items, key, Ordering::Less)
}
