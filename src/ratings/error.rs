//! Rating store error types

use thiserror::Error;

/// Errors raised by a key-value backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend is not available in this environment (e.g. storage disabled)
    #[error("Storage unavailable")]
    Unavailable,

    /// Backend rejected the operation (quota exceeded, security error, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by rating operations
#[derive(Error, Debug)]
pub enum RatingError {
    /// Star value outside 1..=5
    #[error("Invalid star rating {0}: must be between 1 and 5")]
    InvalidStars(u8),

    /// Stored mapping is not a JSON object
    #[error("Corrupt rating data: {0}")]
    Corrupt(String),

    /// Write-through to the backend failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for rating operations
pub type RatingResult<T> = Result<T, RatingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RatingError::InvalidStars(6).to_string(),
            "Invalid star rating 6: must be between 1 and 5"
        );
        assert_eq!(
            RatingError::from(StoreError::Unavailable).to_string(),
            "Store error: Storage unavailable"
        );
    }
}
