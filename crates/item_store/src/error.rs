//! Item store error types.

use thiserror::Error;

/// Errors that can occur during item store operations.
#[derive(Debug, Error)]
pub enum ItemStoreError {
    /// The backing file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record line could not be parsed.
    #[error("malformed record at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl ItemStoreError {
    /// Creates a parse error for the given 1-based line number.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for item store operations.
pub type StoreResult<T> = Result<T, ItemStoreError>;
