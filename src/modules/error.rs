use thiserror::Error;

/// Failures of the log writer and of batch decoding.
///
/// Fetch failures never show up here: the fetcher absorbs them and hands
/// back an empty [`FetchedRecord`](crate::FetchedRecord) instead.
#[derive(Debug, Error)]
pub enum LogError {
    /// Caller input is not an ordered list of entries. Raised before any
    /// filesystem access.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying filesystem operation failed. The `io::Error` is kept
    /// as-is and never retried.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogError>;
