//! Session-backed store implementation.

use async_trait::async_trait;
use entities::{ListToken, Todo, TodoList, TodoToken};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{StoreResult, TodoStore};

/// The per-session persisted shape: every list the user owns, in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Lists in insertion order.
    pub lists: Vec<TodoList<ListToken, TodoToken>>,
}

impl SessionData {
    /// Decodes session data from a serialized session blob.
    pub fn from_blob(blob: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(blob)?)
    }

    /// Encodes session data into a serialized session blob.
    pub fn to_blob(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Store backed by a single user's session data.
///
/// The adapter owns one deserialized copy of the session blob for the
/// lifetime of a request; the collaborator writes [`snapshot`] back into
/// the session afterwards. Concurrent requests on the same session are
/// last-write-wins on the serialized blob, an accepted limitation.
///
/// There is no relational integrity to enforce here: a list's todos live
/// inside it, so deleting the list structurally removes them.
///
/// [`snapshot`]: SessionStore::snapshot
#[derive(Debug, Default)]
pub struct SessionStore {
    data: RwLock<SessionData>,
}

impl SessionStore {
    /// Creates a store over an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-deserialized session data.
    pub fn from_data(data: SessionData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Returns a copy of the current session data for re-serialization.
    pub async fn snapshot(&self) -> SessionData {
        self.data.read().await.clone()
    }
}

#[async_trait]
impl TodoStore for SessionStore {
    type ListId = ListToken;
    type TodoId = TodoToken;

    async fn all_lists(&self) -> StoreResult<Vec<TodoList<ListToken, TodoToken>>> {
        let data = self.data.read().await;
        Ok(data.lists.clone())
    }

    async fn find_list(
        &self,
        list_id: &ListToken,
    ) -> StoreResult<Option<TodoList<ListToken, TodoToken>>> {
        let data = self.data.read().await;
        Ok(data.lists.iter().find(|list| &list.id == list_id).cloned())
    }

    async fn create_new_list(&self, name: &str) -> StoreResult<()> {
        let mut data = self.data.write().await;
        data.lists.push(TodoList::new(ListToken::generate(), name));
        Ok(())
    }

    async fn update_list_name(&self, list_id: &ListToken, new_name: &str) -> StoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(list) = data.lists.iter_mut().find(|list| &list.id == list_id) {
            list.name = new_name.to_string();
        }
        Ok(())
    }

    async fn delete_list(&self, list_id: &ListToken) -> StoreResult<()> {
        let mut data = self.data.write().await;
        data.lists.retain(|list| &list.id != list_id);
        Ok(())
    }

    async fn create_new_todo(&self, list_id: &ListToken, name: &str) -> StoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(list) = data.lists.iter_mut().find(|list| &list.id == list_id) {
            list.todos.push(Todo::new(TodoToken::generate(), name));
        }
        Ok(())
    }

    async fn delete_todo_from_list(
        &self,
        list_id: &ListToken,
        todo_id: &TodoToken,
    ) -> StoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(list) = data.lists.iter_mut().find(|list| &list.id == list_id) {
            list.todos.retain(|todo| &todo.id != todo_id);
        }
        Ok(())
    }

    async fn update_todo_status(
        &self,
        list_id: &ListToken,
        todo_id: &TodoToken,
        completed: bool,
    ) -> StoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(list) = data.lists.iter_mut().find(|list| &list.id == list_id) {
            if let Some(todo) = list.todos.iter_mut().find(|todo| &todo.id == todo_id) {
                todo.completed = completed;
            }
        }
        Ok(())
    }

    async fn mark_all_todos_as_completed(&self, list_id: &ListToken) -> StoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(list) = data.lists.iter_mut().find(|list| &list.id == list_id) {
            for todo in &mut list.todos {
                todo.completed = true;
            }
        }
        Ok(())
    }
}
