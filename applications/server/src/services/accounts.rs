/// Account service - user registration and lookup
use crate::error::Result;
use snapfeed_core::{
    credentials::hash_password, email::is_valid_email, CoreError, CreateUser, DocumentStore,
    ObjectId, User,
};
use snapfeed_storage::users;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn DocumentStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Register a new user and return its store identifier
    ///
    /// Rejects malformed emails and emails already held by another user
    /// (exact, case-sensitive match). The password is stored as a digest.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<ObjectId> {
        if !is_valid_email(email) {
            return Err(CoreError::invalid_input(format!("Invalid e-mail address: {email:?}")).into());
        }

        if users::email_taken(self.store.as_ref(), email).await? {
            return Err(CoreError::conflict(format!("The e-mail {email} is already registered")).into());
        }

        let user = CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
        };

        let id = users::create(self.store.as_ref(), &user).await?;
        tracing::info!(user_id = %id, "Created user");
        Ok(id)
    }

    /// Look up a user by identifier
    pub async fn profile(&self, id: ObjectId) -> Result<User> {
        Ok(users::get(self.store.as_ref(), id).await?)
    }
}
