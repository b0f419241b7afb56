//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing list or todo is not an error: lookups return `None` and
/// mutations on unknown ids are silent no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A list with this name already exists. Raised by the database backend
    /// when an insert races past application-level uniqueness validation
    /// into the UNIQUE constraint.
    #[error("A list named {name:?} already exists")]
    DuplicateListName { name: String },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session blob (de)serialization error.
    #[error("Session blob error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a duplicate-list-name error.
    pub fn duplicate_list_name(name: impl Into<String>) -> Self {
        Self::DuplicateListName { name: name.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
