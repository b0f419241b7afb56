//! Name validation.
//!
//! Runs before any mutating store call; the storage adapters themselves do
//! not re-validate lengths.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::TodoList;

/// Allowed name length for lists and todos, in characters.
const NAME_LENGTH: RangeInclusive<usize> = 1..=100;

/// A rejected list or todo name.
///
/// Recovered locally by the caller and surfaced as a user-facing message;
/// never treated as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// List name outside the allowed length.
    #[error("The list name must be between 1 and 100 characters")]
    ListNameLength,
    /// List name already in use.
    #[error("The list name must be unique")]
    ListNameTaken,
    /// Todo name outside the allowed length.
    #[error("Todo name must be between 1 and 100 characters")]
    TodoNameLength,
}

/// Validates a new or replacement list name against the current snapshot of
/// lists.
///
/// Callers should fetch `existing_lists` immediately before validating;
/// validation and the subsequent insert are not atomic against concurrent
/// writers, and the database backend backstops the remaining window with its
/// UNIQUE constraint.
pub fn validate_list_name<L, T>(
    name: &str,
    existing_lists: &[TodoList<L, T>],
) -> Result<(), ValidationError> {
    if !NAME_LENGTH.contains(&name.chars().count()) {
        return Err(ValidationError::ListNameLength);
    }
    if existing_lists.iter().any(|list| list.name == name) {
        return Err(ValidationError::ListNameTaken);
    }
    Ok(())
}

/// Validates a todo name. Todo names only need to satisfy the length bound.
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_LENGTH.contains(&name.chars().count()) {
        return Err(ValidationError::TodoNameLength);
    }
    Ok(())
}
