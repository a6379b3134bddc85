//! # Document Paths
//!
//! Structural addresses inside a JSON document: the attribute names and
//! array indices walked from the document root to a node.
//!
//! A path serializes as a plain JSON array of strings and integers,
//! e.g. `["actions", 0, "fields", 1, "type"]`, and displays as a
//! JSON Pointer (RFC 6901), e.g. `/actions/0/fields/1/type`.
//!
//! Paths are values. Extending one with [`DocPath::key`] or
//! [`DocPath::index`] yields a new path and leaves the original intact,
//! so a parent's path can be handed to any number of child checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in a [`DocPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position.
    Index(usize),
    /// Object attribute name.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(&k.replace('~', "~0").replace('/', "~1")),
        }
    }
}

/// Sequence of keys and indices from the document root to a node.
///
/// The empty path addresses the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocPath(Vec<PathSegment>);

impl DocPath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path with an attribute name appended.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        self.child(PathSegment::Key(key.to_string()))
    }

    /// Returns a new path with an array index appended.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    /// True for the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`DocPath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
