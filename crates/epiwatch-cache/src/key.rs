//! Hierarchical query keys.
//!
//! A key is an ordered list of segments, domain first, parameters last:
//! `["counties", "history", "047", "7"]`. Prefix relationships between
//! keys drive invalidation: wiping the `["counties"]` prefix drops every
//! county list, detail, and history entry in one call.

use std::fmt;

/// An ordered, hierarchical cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Build a key from an ordered list of segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Build a single-segment key naming a domain, e.g. `"counties"`.
    pub fn domain(name: &str) -> Self {
        Self(vec![name.to_owned()])
    }

    /// Append a segment, consuming and returning the key (builder style).
    #[must_use]
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// The ordered segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this key sits at or below `prefix` in the hierarchy.
    ///
    /// Every key is a prefix of itself.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_segments_in_order() {
        let key = QueryKey::domain("counties").push("history").push("047").push("7");
        assert_eq!(key.segments(), ["counties", "history", "047", "7"]);
    }

    #[test]
    fn prefix_matching() {
        let key = QueryKey::new(["counties", "history", "047"]);
        assert!(key.starts_with(&QueryKey::domain("counties")));
        assert!(key.starts_with(&QueryKey::new(["counties", "history"])));
        assert!(key.starts_with(&key.clone()));
        assert!(!key.starts_with(&QueryKey::domain("diseases")));
        // A longer key is never a prefix of a shorter one.
        assert!(!QueryKey::domain("counties").starts_with(&key));
    }

    #[test]
    fn display_joins_with_slashes() {
        let key = QueryKey::new(["predictions", "summary"]);
        assert_eq!(key.to_string(), "predictions/summary");
    }
}
