//! Error types for state tree operations.

use thiserror::Error;

use super::path::Path;

/// Errors from addressing a [`Node`](super::Node) tree by path.
///
/// These are programming errors from the caller's point of view: a page
/// only addresses paths it built itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("path not found: {path}")]
    PathNotFound { path: Path },

    #[error("index {index} out of bounds (len: {len}) at path {path}")]
    IndexOutOfBounds { path: Path, index: usize, len: usize },

    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: Path,
        expected: &'static str,
        found: &'static str,
    },
}
