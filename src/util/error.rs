//! Error types for the library.

use thiserror::Error;

/// Main error type for binding resolution and scene construction.
#[derive(Error, Debug)]
pub enum Error {
    /// Node handle does not refer to a live node in the scene graph
    #[error("Node \"{0}\" is not valid")]
    InvalidNode(String),

    /// Purpose token outside the recognized set
    #[error("Purpose \"{0}\" is not valid. Options were: \"full\", \"preview\", \"\"")]
    InvalidPurpose(String),

    /// Object name is empty or contains a path separator
    #[error("Invalid object name: {0:?}")]
    InvalidName(String),

    /// An object already exists at the target path
    #[error("Object already exists: {0}")]
    DuplicateObject(String),

    /// Operation that is not allowed on the pseudo-root
    #[error("Operation not permitted on the pseudo-root")]
    PseudoRoot,
}

impl Error {
    /// Create an invalid-node error from anything path-shaped.
    pub fn invalid_node(path: impl Into<String>) -> Self {
        Self::InvalidNode(path.into())
    }

    /// Create an invalid-purpose error from a token.
    pub fn invalid_purpose(token: impl Into<String>) -> Self {
        Self::InvalidPurpose(token.into())
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
