//! In-process document store

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use snapfeed_core::{Collection, CoreError, DocumentStore, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Document store held entirely in memory.
///
/// Used by tests and by `serve --in-memory`. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`
    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .map(|c| c.get(&collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

fn poisoned() -> CoreError {
    CoreError::store("memory store lock poisoned")
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, mut document: Document) -> Result<ObjectId> {
        let id = ObjectId::new();
        document.insert("_id", id);

        let mut collections = self.collections.write().map_err(|_| poisoned())?;
        collections.entry(collection).or_default().push(document);
        Ok(id)
    }

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Document> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        collections
            .get(&collection)
            .and_then(|docs| {
                docs.iter()
                    .find(|doc| doc.get_object_id("_id").is_ok_and(|found| found == id))
            })
            .cloned()
            .ok_or_else(|| CoreError::not_found(collection.name(), id.to_hex()))
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }
}
