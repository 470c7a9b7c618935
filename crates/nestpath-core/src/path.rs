// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dot/bracket path tokenization.
//!
//! A path string such as `profile.name.colors[2].length` addresses a location
//! in a nested structure. Tokenization rewrites every bracketed index `[i]`
//! into a `.i.` segment, splits on `.`, and drops empty segments and the
//! literal `length` segment:
//!
//! ```
//! use nestpath_core::path::tokenize;
//!
//! let path = tokenize("profile.name.colors[2].length");
//! assert_eq!(path.segments(), ["profile", "name", "colors", "2"]);
//! ```
//!
//! Brackets are not validated. An unmatched `[` or `]` stays part of the
//! segment it appears in.

use memchr::{memchr, memchr2};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Segment dropped by tokenization wherever it appears
const LENGTH_SEGMENT: &str = "length";

/// An ordered sequence of segments addressing a nested location.
///
/// Object keys and array indices are both stored as strings. A `Path` never
/// contains an empty segment or a `length` segment when built by
/// [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[String; 8]>,
}

impl Path {
    /// Tokenize a dot/bracket path string
    #[must_use]
    pub fn parse(path: &str) -> Self {
        tokenize(path)
    }

    /// Segments in order from the root
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the path has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }

    /// Last segment, if any
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Segments as an owned vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.segments.to_vec()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(tokenize(s))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        tokenize(path)
    }
}

/// Builds a path from pre-split segments, applying the same filtering as
/// [`tokenize`].
impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self {
            segments: segments.into_iter().filter(|s| keep_segment(s)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

fn keep_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != LENGTH_SEGMENT
}

/// Rewrite every innermost `[...]` group into `.<content>.`.
///
/// A group matches only when no other bracket appears between the opening
/// `[` and its closing `]`. Anything else is copied through unchanged.
fn rewrite_brackets(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len() + 8);
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        out.push_str(&path[pos..open]);

        let after = open + 1;
        match memchr2(b'[', b']', &bytes[after..]) {
            Some(rel) if bytes[after + rel] == b']' => {
                let close = after + rel;
                out.push('.');
                out.push_str(&path[after..close]);
                out.push('.');
                pos = close + 1;
            }
            _ => {
                out.push('[');
                pos = after;
            }
        }
    }

    out.push_str(&path[pos..]);
    out
}

/// Convert a dot/bracket path string into a [`Path`].
///
/// Never fails; the result may be empty (for `""`, `"."` or `"length"`).
#[must_use]
pub fn tokenize(path: &str) -> Path {
    // Fast path: no brackets, split directly
    let segments = if memchr(b'[', path.as_bytes()).is_none() {
        path.split('.')
            .filter(|s| keep_segment(s))
            .map(str::to_owned)
            .collect()
    } else {
        rewrite_brackets(path)
            .split('.')
            .filter(|s| keep_segment(s))
            .map(str::to_owned)
            .collect()
    };
    Path { segments }
}
