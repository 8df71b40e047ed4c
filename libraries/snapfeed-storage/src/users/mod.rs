//! User documents

use crate::StorageError;
use bson::{doc, oid::ObjectId, Document};
use snapfeed_core::{Collection, CreateUser, DocumentStore, Result, User};

fn decode(document: &Document) -> std::result::Result<User, StorageError> {
    Ok(User {
        id: document.get_object_id("_id")?,
        name: document.get_str("name")?.to_string(),
        email: document.get_str("email")?.to_string(),
        password: document.get_str("password")?.to_string(),
    })
}

/// Insert a user whose password has already been hashed
pub async fn create(store: &dyn DocumentStore, user: &CreateUser) -> Result<ObjectId> {
    let document = doc! {
        "name": user.name.as_str(),
        "email": user.email.as_str(),
        "password": user.password_hash.as_str(),
    };
    store.insert(Collection::Users, document).await
}

/// Get a user by ID
pub async fn get(store: &dyn DocumentStore, id: ObjectId) -> Result<User> {
    let document = store.find_by_id(Collection::Users, id).await?;
    Ok(decode(&document)?)
}

/// Get all users
pub async fn get_all(store: &dyn DocumentStore) -> Result<Vec<User>> {
    let documents = store.find_all(Collection::Users).await?;
    let users = documents
        .iter()
        .map(decode)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(users)
}

/// Check whether any existing user has exactly this email
///
/// Scans the whole collection, so cost grows linearly with the user count.
/// Comparison is case-sensitive.
pub async fn email_taken(store: &dyn DocumentStore, email: &str) -> Result<bool> {
    let users = get_all(store).await?;
    Ok(users.iter().any(|user| user.email == email))
}
