/// Post domain type
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// A published image post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned identifier
    pub id: ObjectId,

    /// Free-text caption
    pub caption: String,

    /// Location of the externally hosted image
    pub image_url: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,
}

/// Data required to insert a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePost {
    /// Free-text caption
    pub caption: String,

    /// Location of the externally hosted image
    pub image_url: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,
}
