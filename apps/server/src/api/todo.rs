//! Todo API endpoints.

use axum::{Json, extract::State};
use entities::validate::validate_todo_name;
use serde::{Deserialize, Serialize};
use todo_store::TodoStore;

use crate::api::{list_not_found, parse_list_id, parse_todo_id};
use crate::error::ServerResult;
use crate::state::SharedState;

/// Request to add a todo to a list.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub list_id: String,
    /// Proposed todo name; surrounding whitespace is trimmed.
    pub name: String,
}

/// Request to delete one todo.
#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    pub list_id: String,
    pub todo_id: String,
}

/// Request to set a todo's completion flag.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoStatusRequest {
    pub list_id: String,
    pub todo_id: String,
    pub completed: bool,
}

/// Request to complete every todo in a list.
#[derive(Debug, Deserialize)]
pub struct CompleteAllTodosRequest {
    pub list_id: String,
}

/// Empty success response for mutating todo operations.
#[derive(Debug, Serialize)]
pub struct TodoMutationResponse {}

/// Adds a todo to a list.
pub async fn create_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<CreateTodoRequest>,
) -> ServerResult<Json<TodoMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    let name = request.name.trim().to_string();
    validate_todo_name(&name)?;

    state.store.create_new_todo(&list_id, &name).await?;

    tracing::info!(list_id = %list_id, name = %name, "Todo added");

    Ok(Json(TodoMutationResponse {}))
}

/// Deletes a todo from a list.
pub async fn delete_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<DeleteTodoRequest>,
) -> ServerResult<Json<TodoMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;
    let todo_id = parse_todo_id::<S>(&request.todo_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    state.store.delete_todo_from_list(&list_id, &todo_id).await?;

    tracing::info!(list_id = %list_id, todo_id = %todo_id, "Todo deleted");

    Ok(Json(TodoMutationResponse {}))
}

/// Sets a todo's completion flag.
pub async fn update_todo_status<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<UpdateTodoStatusRequest>,
) -> ServerResult<Json<TodoMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;
    let todo_id = parse_todo_id::<S>(&request.todo_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    state
        .store
        .update_todo_status(&list_id, &todo_id, request.completed)
        .await?;

    tracing::info!(
        list_id = %list_id,
        todo_id = %todo_id,
        completed = request.completed,
        "Todo status updated"
    );

    Ok(Json(TodoMutationResponse {}))
}

/// Marks every todo in a list as completed.
pub async fn complete_all_todos<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<CompleteAllTodosRequest>,
) -> ServerResult<Json<TodoMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    state.store.mark_all_todos_as_completed(&list_id).await?;

    tracing::info!(list_id = %list_id, "All todos completed");

    Ok(Json(TodoMutationResponse {}))
}
