/// Shared application state
use crate::{config::StoreSettings, error::Result, services::AccountService};
use snapfeed_core::DocumentStore;
use snapfeed_storage::{Bounded, MemoryStore, MongoStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub accounts: Arc<AccountService>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let accounts = Arc::new(AccountService::new(Arc::clone(&store)));
        Self { store, accounts }
    }
}

/// Open the document store described by `settings`
///
/// With `in_memory` set, MongoDB is not contacted and all data lives in the
/// process. Either backend is wrapped with the configured deadlines.
pub async fn open_store(settings: &StoreSettings, in_memory: bool) -> Result<Arc<dyn DocumentStore>> {
    let deadlines = settings.deadlines();

    if in_memory {
        tracing::warn!("Using in-memory store, data will not persist");
        return Ok(Arc::new(Bounded::new(MemoryStore::new(), deadlines)));
    }

    let mongo = MongoStore::connect(&settings.uri, &settings.database, settings.connect_timeout()).await?;
    mongo.ensure_indexes().await?;
    Ok(Arc::new(Bounded::new(mongo, deadlines)))
}
