/// Storage-specific errors
use snapfeed_core::CoreError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// MongoDB duplicate key error code
const DUPLICATE_KEY: i32 = 11000;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Error reported by the MongoDB driver
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Stored document is missing a field or has the wrong type
    #[error("Document error: {0}")]
    Document(#[from] bson::document::ValueAccessError),

    /// Insert returned something other than an object id
    #[error("Unexpected identifier type: {0}")]
    UnexpectedId(String),
}

impl StorageError {
    /// Whether this error is a unique index violation
    pub fn is_duplicate_key(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        match self {
            StorageError::Mongo(err) => matches!(
                err.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY
            ),
            _ => false,
        }
    }
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Document(e) => CoreError::from(e),
            e if e.is_duplicate_key() => CoreError::conflict(e.to_string()),
            e => CoreError::store(e.to_string()),
        }
    }
}
