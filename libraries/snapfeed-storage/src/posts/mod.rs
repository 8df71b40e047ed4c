//! Post documents

use crate::StorageError;
use bson::{doc, oid::ObjectId, DateTime, Document};
use snapfeed_core::{Collection, CreatePost, DocumentStore, Post, Result};

fn decode(document: &Document) -> std::result::Result<Post, StorageError> {
    Ok(Post {
        id: document.get_object_id("_id")?,
        caption: document.get_str("caption")?.to_string(),
        image_url: document.get_str("imageURL")?.to_string(),
        timestamp: document.get_datetime("timestamp")?.to_chrono(),
    })
}

/// Insert a post
///
/// The timestamp is stored as a BSON datetime, which keeps millisecond precision.
pub async fn create(store: &dyn DocumentStore, post: &CreatePost) -> Result<ObjectId> {
    let document = doc! {
        "caption": post.caption.as_str(),
        "imageURL": post.image_url.as_str(),
        "timestamp": DateTime::from_chrono(post.timestamp),
    };
    store.insert(Collection::Posts, document).await
}

/// Get a post by ID
pub async fn get(store: &dyn DocumentStore, id: ObjectId) -> Result<Post> {
    let document = store.find_by_id(Collection::Posts, id).await?;
    Ok(decode(&document)?)
}

/// Get every stored post
pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Post>> {
    let documents = store.find_all(Collection::Posts).await?;
    let posts = documents
        .iter()
        .map(decode)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(posts)
}
