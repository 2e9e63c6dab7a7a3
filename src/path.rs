//! Paths to failing fields inside a nested report.
//!
//! A [`FieldPath`] names one location in a validation report, such as
//! `addresses[0].street`. Paths are produced when a [`Report`](crate::Report)
//! is flattened or displayed; the report itself stays tree-shaped.

use std::fmt::{self, Display};

/// A segment of a field path: a named field or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field access by reporting name (e.g. `street`).
    Field(String),
    /// A zero-based list index (e.g. `[0]`).
    Index(usize),
}

/// A path to a field in a nested record, e.g. `addresses[0].street`.
///
/// # Example
///
/// ```rust
/// use triage::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("addresses")
///     .push_index(0)
///     .push_field("street");
///
/// assert_eq!(path.to_string(), "addresses[0].street");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates the empty path, representing the record under validation.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended. The original path
    /// is left untouched.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_field_then_index() {
        let path = FieldPath::root().push_field("emails").push_index(2);
        assert_eq!(path.to_string(), "emails[2]");
    }

    #[test]
    fn test_nested_display() {
        let path = FieldPath::root()
            .push_field("addresses")
            .push_index(0)
            .push_field("street");
        assert_eq!(path.to_string(), "addresses[0].street");
    }

    #[test]
    fn test_push_does_not_mutate() {
        let base = FieldPath::root().push_field("addresses");
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.to_string(), "addresses");
        assert_eq!(first.to_string(), "addresses[0]");
        assert_eq!(second.to_string(), "addresses[1]");
    }

    #[test]
    fn test_segments_iterator() {
        let path = FieldPath::root().push_field("a").push_index(1);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], &PathSegment::Field("a".to_string()));
        assert_eq!(segments[1], &PathSegment::Index(1));
    }
}
