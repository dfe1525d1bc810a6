//! Error types for the hashlab library
//!
//! This module provides unified error handling for all operations.

use thiserror::Error;

/// Error types for the hashlab library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashlabError {
    // ============ Distance Errors ============
    #[error("hash length mismatch: left is {left} characters, right is {right}")]
    LengthMismatch { left: usize, right: usize },

    // ============ Merkle Tree Errors ============
    #[error("data items cannot be empty")]
    EmptyInput,

    #[error("Leaf index {index} out of range")]
    LeafIndexOutOfRange { index: usize },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HashlabError>;
