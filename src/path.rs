//! Field paths for locating values in nested structures.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] for building the
//! human-readable labels attached to validation errors, e.g. `foo`,
//! `foo[2]`, or `foo["bar"]`.

use std::fmt::{self, Display};

/// A segment of a field path below the root variable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A dictionary key access, rendered `["key"]`.
    Key(String),
    /// A sequence index access, rendered `[0]`.
    Index(usize),
    /// The label used when a uniform value validator descends into a
    /// dictionary without naming a specific key, rendered
    /// ` contains a value that`.
    EachValue,
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The location label for a value being validated.
///
/// A path always starts from a non-empty root variable name supplied by the
/// caller; combinators extend it as they descend into containers. Paths are
/// only ever used to format error messages.
///
/// # Example
///
/// ```rust
/// use tripwire::FieldPath;
///
/// let path = FieldPath::new("widgets").push_index(2).push_key("name");
/// assert_eq!(path.to_string(), "widgets[2][\"name\"]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    var_name: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates a path consisting of just the root variable name.
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            segments: Vec::new(),
        }
    }

    /// Returns the root variable name.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Returns a new path with a key segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path labeled for uniform value validation, rendered
    /// `<path> contains a value that`.
    pub fn push_each_value(&self) -> Self {
        self.push(PathSegment::EachValue)
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            var_name: self.var_name.clone(),
            segments,
        }
    }

    /// Returns true if this path is just the root variable name.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns an iterator over the path segments below the root.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                var_name: self.var_name.clone(),
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.var_name)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(name) => write!(f, "[\"{}\"]", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::EachValue => write!(f, " contains a value that")?,
            }
        }
        Ok(())
    }
}
