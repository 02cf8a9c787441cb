//! Error types for tree operations.

use std::fmt;

use thiserror::Error;

/// Result type for tree operations that can fail.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised by tree operations.
///
/// Lookups are the only fallible operation; inserting and clearing are total
/// over well-formed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The searched key is absent from the tree.
    #[error("key {key} not found in tree of size {size}")]
    KeyNotFound {
        /// Rendering of the key that was searched for.
        key: String,
        /// Number of entries in the tree at the time of the lookup.
        size: usize,
    },
}

impl TreeError {
    /// Creates a key-not-found error from the searched key and the current
    /// tree size.
    pub fn key_not_found(key: impl fmt::Display, size: usize) -> Self {
        Self::KeyNotFound {
            key: key.to_string(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key_and_size() {
        let err = TreeError::key_not_found(42, 3);
        assert_eq!(err.to_string(), "key 42 not found in tree of size 3");
    }

    #[test]
    fn constructor_renders_the_key() {
        let err = TreeError::key_not_found("alpha", 0);
        assert_eq!(
            err,
            TreeError::KeyNotFound {
                key: "alpha".to_string(),
                size: 0
            }
        );
    }
}
