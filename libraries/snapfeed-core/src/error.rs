/// Core error types for Snapfeed
use std::time::Duration;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Snapfeed
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed input (bad email, unparsable id, undecodable body)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Uniqueness violation, e.g. an email that is already registered
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No document with the given identifier
    #[error("No document in {collection} with id {id}")]
    NotFound {
        /// Collection that was searched
        collection: String,
        /// Identifier that was looked up
        id: String,
    },

    /// The store did not answer within the operation deadline
    #[error("{operation} timed out after {}s", after.as_secs())]
    Timeout {
        /// Gateway operation that expired
        operation: &'static str,
        /// Deadline that was exceeded
        after: Duration,
    },

    /// Any other store-layer failure
    #[error("Store error: {0}")]
    Store(String),

    /// A stored document did not have the expected shape
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a not found error
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl From<bson::document::ValueAccessError> for CoreError {
    fn from(err: bson::document::ValueAccessError) -> Self {
        Self::Serialization(err.to_string())
    }
}
