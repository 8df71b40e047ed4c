//! Snapfeed Core
//!
//! Domain types, store abstraction, and input checks shared by the Snapfeed
//! storage layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Post` and their creation payloads
//! - **Store Gateway**: the `DocumentStore` trait over the `users` and `posts` collections
//! - **Input Checks**: email syntax validation and credential hashing
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use snapfeed_core::{credentials::hash_password, email::is_valid_email};
//!
//! assert!(is_valid_email("ada@example.com"));
//! assert_eq!(hash_password("abc"), hash_password("abc"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod credentials;
pub mod email;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use bson::{oid::ObjectId, Document};
pub use error::{CoreError, Result};
pub use store::{parse_object_id, Collection, DocumentStore};
pub use types::{CreatePost, CreateUser, Post, User};
