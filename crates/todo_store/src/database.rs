//! SQLite store implementation.

use async_trait::async_trait;
use entities::{ListRowId, Todo, TodoList, TodoRowId};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::{StoreError, StoreResult, TodoStore};

/// Store backed by a SQLite database shared across all requests.
///
/// Reads eagerly attach each list's todos; nothing lazy escapes the adapter
/// boundary. The schema declares no ON DELETE cascade, so list deletion
/// removes dependent todo rows itself, inside one transaction.
pub struct DatabaseStore {
    pool: Pool<Sqlite>,
}

impl DatabaseStore {
    /// Connects to the database and runs idempotent schema setup.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        Ok(store)
    }

    /// Creates each table only if it is absent.
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS lists (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL UNIQUE
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 completed BOOLEAN NOT NULL DEFAULT FALSE,
                 list_id INTEGER NOT NULL REFERENCES lists (id)
             )",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("database schema ready");
        Ok(())
    }

    /// Fetches a list's todos in insertion order (row id order).
    async fn todos_for_list(&self, list_id: i64) -> StoreResult<Vec<Todo<TodoRowId>>> {
        let rows: Vec<(i64, String, bool)> =
            sqlx::query_as("SELECT id, name, completed FROM todos WHERE list_id = ? ORDER BY id")
                .bind(list_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, completed)| Todo {
                id: TodoRowId::new(id),
                name,
                completed,
            })
            .collect())
    }
}

/// Maps a UNIQUE-constraint violation on `lists.name` to the
/// duplicate-name error kind; anything else stays a database error.
fn map_list_name_error(name: &str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::duplicate_list_name(name)
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl TodoStore for DatabaseStore {
    type ListId = ListRowId;
    type TodoId = TodoRowId;

    async fn all_lists(&self) -> StoreResult<Vec<TodoList<ListRowId, TodoRowId>>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM lists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut lists = Vec::with_capacity(rows.len());
        for (id, name) in rows {
            let todos = self.todos_for_list(id).await?;
            lists.push(TodoList {
                id: ListRowId::new(id),
                name,
                todos,
            });
        }
        Ok(lists)
    }

    async fn find_list(
        &self,
        list_id: &ListRowId,
    ) -> StoreResult<Option<TodoList<ListRowId, TodoRowId>>> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM lists WHERE id = ?")
                .bind(list_id.value())
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((id, name)) => {
                let todos = self.todos_for_list(id).await?;
                Ok(Some(TodoList {
                    id: ListRowId::new(id),
                    name,
                    todos,
                }))
            }
            None => Ok(None),
        }
    }

    async fn create_new_list(&self, name: &str) -> StoreResult<()> {
        sqlx::query("INSERT INTO lists (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|err| map_list_name_error(name, err))?;
        Ok(())
    }

    async fn update_list_name(&self, list_id: &ListRowId, new_name: &str) -> StoreResult<()> {
        sqlx::query("UPDATE lists SET name = ? WHERE id = ?")
            .bind(new_name)
            .bind(list_id.value())
            .execute(&self.pool)
            .await
            .map_err(|err| map_list_name_error(new_name, err))?;
        Ok(())
    }

    async fn delete_list(&self, list_id: &ListRowId) -> StoreResult<()> {
        // Dependent todos first; both deletes commit together or not at all.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM todos WHERE list_id = ?")
            .bind(list_id.value())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(list_id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn create_new_todo(&self, list_id: &ListRowId, name: &str) -> StoreResult<()> {
        // INSERT ... SELECT inserts nothing when the list is unknown,
        // keeping the no-op contract without a separate existence check.
        sqlx::query("INSERT INTO todos (name, list_id) SELECT ?, id FROM lists WHERE id = ?")
            .bind(name)
            .bind(list_id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_todo_from_list(
        &self,
        list_id: &ListRowId,
        todo_id: &TodoRowId,
    ) -> StoreResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = ? AND list_id = ?")
            .bind(todo_id.value())
            .bind(list_id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_todo_status(
        &self,
        list_id: &ListRowId,
        todo_id: &TodoRowId,
        completed: bool,
    ) -> StoreResult<()> {
        sqlx::query("UPDATE todos SET completed = ? WHERE id = ? AND list_id = ?")
            .bind(completed)
            .bind(todo_id.value())
            .bind(list_id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn mark_all_todos_as_completed(&self, list_id: &ListRowId) -> StoreResult<()> {
        sqlx::query("UPDATE todos SET completed = TRUE WHERE list_id = ?")
            .bind(list_id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::views;
    use tempfile::TempDir;

    async fn test_store() -> (TempDir, DatabaseStore) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("todos.db").display());
        let store = DatabaseStore::connect(&url).await.unwrap();
        (dir, store)
    }

    async fn only_list(store: &DatabaseStore) -> TodoList<ListRowId, TodoRowId> {
        let lists = store.all_lists().await.unwrap();
        assert_eq!(lists.len(), 1);
        lists.into_iter().next().unwrap()
    }

    #[tokio::test]
    async fn schema_setup_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("todos.db").display());

        let first = DatabaseStore::connect(&url).await.unwrap();
        first.create_new_list("Groceries").await.unwrap();
        drop(first);

        // Reconnecting must not recreate tables or lose data.
        let second = DatabaseStore::connect(&url).await.unwrap();
        let lists = second.all_lists().await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Groceries");
    }

    #[tokio::test]
    async fn create_and_find_round_trip() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();

        let list = only_list(&store).await;
        assert_eq!(list.name, "Groceries");
        assert!(list.todos.is_empty());

        let found = store.find_list(&list.id).await.unwrap();
        assert_eq!(found, Some(list));
    }

    #[tokio::test]
    async fn find_unknown_list_returns_none() {
        let (_dir, store) = test_store().await;
        assert_eq!(store.find_list(&ListRowId::new(999)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn new_todo_starts_incomplete_and_order_is_preserved() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        let list = only_list(&store).await;

        for name in ["Milk", "Eggs", "Bread"] {
            store.create_new_todo(&list.id, name).await.unwrap();
        }

        let list = store.find_list(&list.id).await.unwrap().unwrap();
        let names: Vec<&str> = list.todos.iter().map(|todo| todo.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Bread"]);
        assert!(list.todos.iter().all(|todo| !todo.completed));
    }

    #[tokio::test]
    async fn duplicate_list_name_is_a_distinct_error() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();

        let err = store.create_new_list("Groceries").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateListName { ref name } if name == "Groceries"
        ));

        assert_eq!(store.all_lists().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_a_distinct_error() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        store.create_new_list("Chores").await.unwrap();

        let chores = store.all_lists().await.unwrap().remove(1);
        let err = store
            .update_list_name(&chores.id, "Groceries")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateListName { .. }));
    }

    #[tokio::test]
    async fn delete_list_leaves_no_orphan_todos() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        let list = only_list(&store).await;
        for name in ["Milk", "Eggs", "Bread"] {
            store.create_new_todo(&list.id, name).await.unwrap();
        }

        store.delete_list(&list.id).await.unwrap();

        assert_eq!(store.find_list(&list.id).await.unwrap(), None);

        // Check the table directly: no todo row may still reference the
        // deleted list.
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE list_id = ?")
            .bind(list.id.value())
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn create_todo_for_unknown_list_is_a_no_op() {
        let (_dir, store) = test_store().await;

        store
            .create_new_todo(&ListRowId::new(999), "Milk")
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn delete_todo_requires_both_ids_to_match() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        store.create_new_list("Chores").await.unwrap();
        let lists = store.all_lists().await.unwrap();
        store.create_new_todo(&lists[0].id, "Milk").await.unwrap();

        let milk = store.find_list(&lists[0].id).await.unwrap().unwrap().todos[0]
            .id;

        // Wrong list id: nothing happens.
        store
            .delete_todo_from_list(&lists[1].id, &milk)
            .await
            .unwrap();
        let list = store.find_list(&lists[0].id).await.unwrap().unwrap();
        assert_eq!(list.todos.len(), 1);

        store
            .delete_todo_from_list(&lists[0].id, &milk)
            .await
            .unwrap();
        let list = store.find_list(&lists[0].id).await.unwrap().unwrap();
        assert!(list.todos.is_empty());
    }

    #[tokio::test]
    async fn update_todo_status_toggles_the_flag() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        let list = only_list(&store).await;
        store.create_new_todo(&list.id, "Milk").await.unwrap();
        let milk = store.find_list(&list.id).await.unwrap().unwrap().todos[0].id;

        store.update_todo_status(&list.id, &milk, true).await.unwrap();
        let list_after = store.find_list(&list.id).await.unwrap().unwrap();
        assert!(list_after.todos[0].completed);

        store.update_todo_status(&list.id, &milk, false).await.unwrap();
        let list_after = store.find_list(&list.id).await.unwrap().unwrap();
        assert!(!list_after.todos[0].completed);
    }

    #[tokio::test]
    async fn mark_all_completes_every_todo() {
        let (_dir, store) = test_store().await;
        store.create_new_list("Groceries").await.unwrap();
        let list = only_list(&store).await;
        store.create_new_todo(&list.id, "Milk").await.unwrap();
        store.create_new_todo(&list.id, "Eggs").await.unwrap();

        store.mark_all_todos_as_completed(&list.id).await.unwrap();

        let list = store.find_list(&list.id).await.unwrap().unwrap();
        assert_eq!(views::remaining_count(&list), 0);
        assert!(views::is_list_completed(&list));
    }
}
