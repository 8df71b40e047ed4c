//! MongoDB-backed document store

use crate::error::{Result as StorageResult, StorageError};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{ClientOptions, IndexOptions},
    Client, Database, IndexModel,
};
use snapfeed_core::{Collection, CoreError, DocumentStore, Result};
use std::time::Duration;

const APP_NAME: &str = "snapfeed";

/// Document store backed by a MongoDB database
///
/// The driver client pools connections internally, so one `MongoStore` is
/// created at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect to `uri` and verify the server answers within `connect_timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid or the server cannot be reached
    pub async fn connect(uri: &str, database: &str, connect_timeout: Duration) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(database);

        tokio::time::timeout(connect_timeout, database.run_command(doc! { "ping": 1 }, None))
            .await
            .map_err(|_| {
                StorageError::Connection(format!(
                    "no answer from {uri} within {}s",
                    connect_timeout.as_secs()
                ))
            })??;

        tracing::info!(database = database.name(), "Connected to MongoDB");
        Ok(Self { client, database })
    }

    /// Create the unique index on `users.email`
    ///
    /// Duplicate registrations that race past the handler's scan are then
    /// rejected by the server with a duplicate key error. Index creation
    /// fails if `users` already holds duplicate emails.
    pub async fn ensure_indexes(&self) -> StorageResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection(Collection::Users)
            .create_index(index, None)
            .await?;
        Ok(())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.database.collection(collection.name())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: Collection, document: Document) -> Result<ObjectId> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(StorageError::from)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::UnexpectedId(result.inserted_id.to_string()).into())
    }

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Document> {
        self.collection(collection)
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(StorageError::from)?
            .ok_or_else(|| CoreError::not_found(collection.name(), id.to_hex()))
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(None, None)
            .await
            .map_err(StorageError::from)?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(StorageError::from)?;
        Ok(documents)
    }
}
