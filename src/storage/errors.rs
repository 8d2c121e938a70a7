//! Storage error types
//!
//! Error codes:
//! - STORAGE_UNAVAILABLE: no database handle was configured
//! - STORAGE_CONNECTION_FAILED: the client could not be created
//! - STORAGE_ENCODING_FAILED: a record could not be turned into a document
//! - STORAGE_WRITE_FAILED: the store rejected an insert
//! - STORAGE_READ_FAILED: the store rejected a query

use mongodb::bson;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
///
/// Every variant is reported to clients as a generic server error carrying
/// the message; no variant is retried.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// No database handle exists
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.")]
    Unavailable,

    /// Client creation failed (malformed URL, bad options)
    #[error("Failed to connect to database: {0}")]
    Connection(String),

    /// Record could not be serialized into a document
    #[error("Failed to encode document: {0}")]
    Encoding(String),

    /// Insert rejected or connection failed during a write
    #[error("{0}")]
    WriteFailed(String),

    /// Query rejected or connection failed during a read
    #[error("{0}")]
    ReadFailed(String),
}

impl StorageError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Unavailable => "STORAGE_UNAVAILABLE",
            StorageError::Connection(_) => "STORAGE_CONNECTION_FAILED",
            StorageError::Encoding(_) => "STORAGE_ENCODING_FAILED",
            StorageError::WriteFailed(_) => "STORAGE_WRITE_FAILED",
            StorageError::ReadFailed(_) => "STORAGE_READ_FAILED",
        }
    }

    pub fn connection(err: impl ToString) -> Self {
        StorageError::Connection(err.to_string())
    }

    pub fn write_failed(err: impl ToString) -> Self {
        StorageError::WriteFailed(err.to_string())
    }

    pub fn read_failed(err: impl ToString) -> Self {
        StorageError::ReadFailed(err.to_string())
    }
}

impl From<bson::ser::Error> for StorageError {
    fn from(err: bson::ser::Error) -> Self {
        StorageError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_settings() {
        let message = StorageError::Unavailable.to_string();
        assert!(message.contains("DATABASE_URL"));
        assert!(message.contains("DATABASE_NAME"));
    }

    #[test]
    fn test_backend_message_passed_through() {
        let err = StorageError::write_failed("E11000 duplicate key error");
        assert_eq!(err.to_string(), "E11000 duplicate key error");
        assert_eq!(err.code(), "STORAGE_WRITE_FAILED");
    }
}
