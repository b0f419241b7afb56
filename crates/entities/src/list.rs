//! List and todo entity definitions.

use serde::{Deserialize, Serialize};

/// A single todo item, owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo<I> {
    /// Unique identifier within the owning list.
    pub id: I,
    /// Display name (1-100 characters, uniqueness not enforced).
    pub name: String,
    /// Completion flag.
    pub completed: bool,
}

impl<I> Todo<I> {
    /// Creates a new incomplete todo.
    pub fn new(id: I, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// A named collection of todos.
///
/// Generic over the per-backend id types so session tokens and database row
/// ids never mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList<L, T> {
    /// Unique identifier.
    pub id: L,
    /// Display name (1-100 characters, unique among all lists).
    pub name: String,
    /// Todos in insertion order.
    pub todos: Vec<Todo<T>>,
}

impl<L, T> TodoList<L, T> {
    /// Creates a new list with no todos.
    pub fn new(id: L, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }
}
