//! Storage adapter trait shared by both backends.

use std::fmt::Display;
use std::str::FromStr;

use async_trait::async_trait;
use entities::TodoList;

use crate::StoreResult;

/// Trait for list and todo storage operations.
///
/// Both backends implement the same operations; they differ only in their
/// id scheme, captured by the associated types so session tokens and
/// database row ids never mix. Mutating operations persist synchronously:
/// a subsequent read on the same backend observes the change, never an
/// intermediate state.
///
/// Lookups signal absence with `None` instead of failing, and mutations on
/// unknown ids are silent no-ops. Callers that need to report a not-found
/// condition check [`find_list`](TodoStore::find_list) first.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// List identifier for this backend.
    type ListId: Clone + Display + FromStr + Send + Sync + 'static;
    /// Todo identifier for this backend.
    type TodoId: Clone + Display + FromStr + Send + Sync + 'static;

    /// Returns every list in insertion order, todos attached.
    async fn all_lists(&self) -> StoreResult<Vec<TodoList<Self::ListId, Self::TodoId>>>;

    /// Looks up a list by id, todos attached.
    async fn find_list(
        &self,
        list_id: &Self::ListId,
    ) -> StoreResult<Option<TodoList<Self::ListId, Self::TodoId>>>;

    /// Appends a new list with no todos under a fresh unique id.
    async fn create_new_list(&self, name: &str) -> StoreResult<()>;

    /// Renames a list.
    async fn update_list_name(&self, list_id: &Self::ListId, new_name: &str) -> StoreResult<()>;

    /// Removes a list together with all its todos, atomically.
    async fn delete_list(&self, list_id: &Self::ListId) -> StoreResult<()>;

    /// Appends an incomplete todo to a list.
    async fn create_new_todo(&self, list_id: &Self::ListId, name: &str) -> StoreResult<()>;

    /// Removes exactly the todo matching both ids.
    async fn delete_todo_from_list(
        &self,
        list_id: &Self::ListId,
        todo_id: &Self::TodoId,
    ) -> StoreResult<()>;

    /// Sets a todo's completion flag.
    async fn update_todo_status(
        &self,
        list_id: &Self::ListId,
        todo_id: &Self::TodoId,
        completed: bool,
    ) -> StoreResult<()>;

    /// Marks every todo in a list as completed.
    async fn mark_all_todos_as_completed(&self, list_id: &Self::ListId) -> StoreResult<()>;
}
