//! Resolution errors and warnings
//!
//! Fatal errors abort the whole build and carry the offending node's
//! path from the root. Warnings accumulate in the build output and never
//! interrupt the walk.

use std::collections::VecDeque;
use std::fmt;

/// Sequence of element names from the root down to one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(VecDeque<String>);

impl NodePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Append a name at the leaf end.
    pub fn push(&mut self, name: &str) {
        self.0.push_back(name.to_string());
    }

    /// Prepend a name at the root end. Construction errors grow their
    /// path this way while unwinding.
    pub fn push_front(&mut self, name: &str) {
        self.0.push_front(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

/// Fatal element error with the path to the offending node
#[derive(Debug, thiserror::Error)]
#[error("{kind} (at {path})")]
pub struct ElementError {
    pub path: NodePath,
    pub kind: ElementErrorKind,
}

impl ElementError {
    pub fn new(kind: ElementErrorKind) -> Self {
        Self {
            path: NodePath::new(),
            kind,
        }
    }

    pub fn with_path(kind: ElementErrorKind, path: NodePath) -> Self {
        Self { path, kind }
    }

    /// Prepend an ancestor name while the error unwinds out of a
    /// recursive construction.
    pub fn at(mut self, name: &str) -> Self {
        self.path.push_front(name);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ElementErrorKind {
    #[error("unknown element type `{0}`")]
    UnknownElementType(String),

    #[error("list child `{child}` is not a group element")]
    NotAGroup { child: String },

    #[error("font `{0}` is not found")]
    FontNotFound(String),
}

/// Non-fatal problem found during resolution
#[derive(Debug, Clone)]
pub struct BuildWarning {
    pub path: NodePath,
    pub kind: WarningKind,
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.path)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WarningKind {
    #[error("sprite `{sprite}` (image `{image}`) is not found")]
    SpriteNotFound { sprite: String, image: String },

    #[error("prefab `{0}` is not found")]
    PrefabNotFound(String),

    #[error("no background image")]
    MissingBackground,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let mut path = NodePath::from_names(["Menu", "Item"]);
        assert_eq!(path.to_string(), "Menu/Item");

        path.push_front("Root");
        assert_eq!(path.to_string(), "Root/Menu/Item");

        assert_eq!(NodePath::new().to_string(), "<root>");
    }

    #[test]
    fn test_error_unwind_path() {
        let err = ElementError::new(ElementErrorKind::UnknownElementType("Blob".into()))
            .at("Panel")
            .at("Root");

        assert_eq!(err.path.to_string(), "Root/Panel");
        assert_eq!(
            err.to_string(),
            "unknown element type `Blob` (at Root/Panel)"
        );
    }
}
