//! Error types for the matching index

use thiserror::Error;

/// Result type for fallible index operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors produced while normalizing keys and queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Input bytes are not well-formed UTF-8
    #[error("invalid UTF-8 encoding (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },
}
