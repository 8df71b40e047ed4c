//! Per-operation deadlines for any document store

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use snapfeed_core::{Collection, CoreError, DocumentStore, Result};
use std::future::Future;
use std::time::Duration;

/// Deadline applied to each gateway call, measured from call start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    /// Budget for `insert` and `find_by_id`
    pub operation: Duration,
    /// Budget for `find_all` collection scans
    pub scan: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            operation: Duration::from_secs(15),
            scan: Duration::from_secs(10),
        }
    }
}

/// Wraps a store so every call fails with [`CoreError::Timeout`] once its
/// deadline passes.
///
/// The in-flight call is dropped on expiry; no retry is attempted.
#[derive(Debug)]
pub struct Bounded<S> {
    inner: S,
    deadlines: Deadlines,
}

impl<S> Bounded<S> {
    pub fn new(inner: S, deadlines: Deadlines) -> Self {
        Self { inner, deadlines }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

async fn within<T>(
    operation: &'static str,
    after: Duration,
    call: impl Future<Output = Result<T>> + Send,
) -> Result<T> {
    match tokio::time::timeout(after, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, ?after, "store call exceeded its deadline");
            Err(CoreError::Timeout { operation, after })
        }
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for Bounded<S> {
    async fn insert(&self, collection: Collection, document: Document) -> Result<ObjectId> {
        within(
            "insert",
            self.deadlines.operation,
            self.inner.insert(collection, document),
        )
        .await
    }

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Document> {
        within(
            "find_by_id",
            self.deadlines.operation,
            self.inner.find_by_id(collection, id),
        )
        .await
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>> {
        within("find_all", self.deadlines.scan, self.inner.find_all(collection)).await
    }
}
