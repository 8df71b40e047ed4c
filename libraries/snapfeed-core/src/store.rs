//! Document store gateway

use crate::error::{CoreError, Result};
use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::fmt;

/// Named collection within the service's database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Registered users
    Users,
    /// Image posts
    Posts,
}

impl Collection {
    /// Collection name in the store
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operations the service performs against its document database
///
/// Implementations must be safe to share across concurrent requests. The
/// store assigns identifiers on insert and stores them under `_id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the identifier the store assigned
    async fn insert(&self, collection: Collection, document: Document) -> Result<ObjectId>;

    /// Fetch one document by identifier
    ///
    /// Fails with [`CoreError::NotFound`] if no document has that identifier.
    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Document>;

    /// Fetch every document in a collection, in no particular order
    ///
    /// A failure part way through the scan fails the whole call.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>>;
}

/// Parse the 24 character hex form of a store identifier
pub fn parse_object_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| CoreError::invalid_input(format!("malformed id: {raw:?}")))
}
