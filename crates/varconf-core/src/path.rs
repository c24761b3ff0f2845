//! Key-path parsing and tree traversal
//!
//! Dot-separated key paths address nested values in a configuration tree:
//! `"database.pool.size"` walks three map levels. Splitting preserves empty
//! segments, so `"a..b"` addresses the empty-string key between `a` and `b`.

use serde_json::Value;

/// A parsed dot-separated key path.
///
/// Segments borrow from the input string and are matched literally against
/// map keys, empty segments included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Split a dotted key into its segments.
    ///
    /// Every `.` separates two segments; consecutive dots produce empty
    /// segments that match empty-string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use varconf_core::KeyPath;
    ///
    /// assert_eq!(KeyPath::parse("a.b.c").segments(), ["a", "b", "c"]);
    /// assert_eq!(KeyPath::parse("a..c").segments(), ["a", "", "c"]);
    /// ```
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }

    /// The path's segments in order.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

/// Walk `root` along `path`, map by map.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not a map; scalars and lists cannot be traversed into.
pub fn traverse<'v>(root: &'v Value, path: &KeyPath<'_>) -> Option<&'v Value> {
    let mut current = root;
    for segment in path.segments() {
        match current {
            Value::Object(map) => current = map.get(*segment)?,
            _ => return None,
        }
    }
    Some(current)
}
