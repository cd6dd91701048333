use thiserror::Error;

/// Errors a raw cache client can report.
///
/// Payload encoding has its own `SerializationError`; these only cover
/// talking to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
