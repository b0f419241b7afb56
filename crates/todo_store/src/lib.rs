//! Storage backends for the todo service.
//!
//! This crate provides the storage abstraction for lists and todos. It
//! supports a per-session in-memory backend (lists live in the user's
//! session blob) and a SQLite backend shared across all requests.

mod database;
mod error;
mod session;
mod store;

pub use database::*;
pub use error::*;
pub use session::*;
pub use store::*;
