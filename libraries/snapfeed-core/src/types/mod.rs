//! Domain types for Snapfeed
mod post;
mod user;

pub use post::{CreatePost, Post};
pub use user::{CreateUser, User};
