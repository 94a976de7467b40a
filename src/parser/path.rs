//! Field location tracking for error messages.
//!
//! The JSON tree carries no source offsets, so decode errors point at the
//! offending field by its path from the document root instead.

use std::fmt;

/// A path from the document root to a value, e.g. `discs[2].cMask`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    path: String,
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a key of the object at this path.
    pub fn key(&self, key: &str) -> Self {
        if self.path.is_empty() {
            Self {
                path: key.to_string(),
            }
        } else {
            Self {
                path: format!("{}.{}", self.path, key),
            }
        }
    }

    /// Path to an element of the array at this path.
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "$")
        } else {
            write!(f, "{}", self.path)
        }
    }
}
