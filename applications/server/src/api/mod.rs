/// API route modules
pub mod health;
pub mod posts;
pub mod users;

use serde::Serialize;
use snapfeed_core::ObjectId;

/// Body returned by every create endpoint
#[derive(Debug, Serialize)]
pub struct InsertResult {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

impl From<ObjectId> for InsertResult {
    fn from(id: ObjectId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}
