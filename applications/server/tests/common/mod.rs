//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use snapfeed_core::{Collection, CoreError, DocumentStore, Document, ObjectId, Result};
use snapfeed_server::{create_router, AppState};
use snapfeed_storage::{Bounded, Deadlines, MemoryStore};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

/// Create a memory-backed store wrapped with default deadlines
pub fn create_test_store() -> Arc<Bounded<MemoryStore>> {
    Arc::new(Bounded::new(MemoryStore::new(), Deadlines::default()))
}

/// Build the full router over `store`
pub fn create_test_app(store: Arc<dyn DocumentStore>) -> Router {
    create_router(AppState::new(store))
}

/// Send a JSON body to `uri`
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Issue a GET to `uri`
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store that fails every call with a store error
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _collection: Collection, _document: Document) -> Result<ObjectId> {
        Err(CoreError::store("connection reset"))
    }

    async fn find_by_id(&self, _collection: Collection, _id: ObjectId) -> Result<Document> {
        Err(CoreError::store("connection reset"))
    }

    async fn find_all(&self, _collection: Collection) -> Result<Vec<Document>> {
        Ok(vec![])
    }
}

/// Store that never answers within any reasonable deadline
pub struct StalledStore;

#[async_trait]
impl DocumentStore for StalledStore {
    async fn insert(&self, _collection: Collection, _document: Document) -> Result<ObjectId> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(ObjectId::new())
    }

    async fn find_by_id(&self, _collection: Collection, _id: ObjectId) -> Result<Document> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Document::new())
    }

    async fn find_all(&self, _collection: Collection) -> Result<Vec<Document>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(vec![])
    }
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_NAME: &str = "Test User";
    pub const TEST_EMAIL: &str = "testuser@example.com";
    pub const TEST_PASSWORD: &str = "TestPassword123!";
}
