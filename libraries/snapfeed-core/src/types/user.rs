/// User domain type
use bson::oid::ObjectId;

/// Registered user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier
    pub id: ObjectId,

    /// Display name
    pub name: String,

    /// Email address, unique among users at creation time
    pub email: String,

    /// Password digest, never the plaintext
    pub password: String,
}

/// Data required to insert a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Validated email address
    pub email: String,

    /// Digest produced by [`crate::credentials::hash_password`]
    pub password_hash: String,
}
