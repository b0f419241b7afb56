//! Core entity definitions for the todo service.
//!
//! This crate defines the list and todo data types shared by both storage
//! backends, the per-backend identifier newtypes, and the pure validation
//! and view-helper functions applied by the HTTP layer.

mod ids;
mod list;
pub mod validate;
pub mod views;

pub use ids::*;
pub use list::*;
pub use validate::ValidationError;
