//! Snapfeed Storage
//!
//! Document store gateway implementations for Snapfeed.
//!
//! # Architecture
//!
//! - **Backends**: `MongoStore` for production, `MemoryStore` for tests and local runs
//! - **Deadlines**: `Bounded` wraps any backend so every call is time-limited
//! - **Vertical Slicing**: `users` and `posts` own their document layout and decoding
//!
//! # Example
//!
//! ```rust
//! use snapfeed_core::CreateUser;
//! use snapfeed_storage::{users, Bounded, Deadlines, MemoryStore};
//!
//! # async fn example() -> snapfeed_core::Result<()> {
//! let store = Bounded::new(MemoryStore::new(), Deadlines::default());
//!
//! let id = users::create(
//!     &store,
//!     &CreateUser {
//!         name: "Ada".to_string(),
//!         email: "ada@example.com".to_string(),
//!         password_hash: snapfeed_core::credentials::hash_password("secret"),
//!     },
//! )
//! .await?;
//!
//! let user = users::get(&store, id).await?;
//! assert_eq!(user.email, "ada@example.com");
//! # Ok(())
//! # }
//! ```

mod bounded;
mod error;
mod memory;
mod mongo;

// Vertical slices
pub mod posts;
pub mod users;

pub use bounded::{Bounded, Deadlines};
pub use error::StorageError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
