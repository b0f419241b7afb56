//! List API endpoints.

use std::fmt::Display;

use axum::{Json, extract::State};
use entities::{TodoList, validate::validate_list_name, views};
use serde::{Deserialize, Serialize};
use todo_store::TodoStore;

use crate::api::{list_not_found, parse_list_id};
use crate::error::ServerResult;
use crate::state::SharedState;

/// Request to create a list.
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    /// Proposed list name; surrounding whitespace is trimmed.
    pub name: String,
}

/// Request to fetch one list.
#[derive(Debug, Deserialize)]
pub struct GetListRequest {
    pub list_id: String,
}

/// Request to rename a list.
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub list_id: String,
    pub name: String,
}

/// Request to delete a list.
#[derive(Debug, Deserialize)]
pub struct DeleteListRequest {
    pub list_id: String,
}

/// Summary of a list for the overview.
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    /// Incomplete todo count.
    pub remaining: usize,
    /// Total todo count.
    pub total: usize,
    /// True when the list has todos and all are completed.
    pub completed: bool,
}

/// A todo as rendered to clients.
#[derive(Debug, Serialize)]
pub struct TodoView {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// Detail view of one list, todos display-sorted (incomplete first).
#[derive(Debug, Serialize)]
pub struct ListDetail {
    pub id: String,
    pub name: String,
    pub todos: Vec<TodoView>,
    pub remaining: usize,
    pub total: usize,
    pub completed: bool,
}

/// Response listing every list, display-sorted (incomplete lists first).
#[derive(Debug, Serialize)]
pub struct ListListsResponse {
    pub lists: Vec<ListSummary>,
}

/// Response carrying one list's detail view.
#[derive(Debug, Serialize)]
pub struct GetListResponse {
    pub list: ListDetail,
}

/// Empty success response for mutating list operations.
#[derive(Debug, Serialize)]
pub struct ListMutationResponse {}

fn summarize<L: Display, T>(list: &TodoList<L, T>) -> ListSummary {
    ListSummary {
        id: list.id.to_string(),
        name: list.name.clone(),
        remaining: views::remaining_count(list),
        total: views::total_count(list),
        completed: views::is_list_completed(list),
    }
}

fn to_detail<L: Display, T: Display>(list: TodoList<L, T>) -> ListDetail {
    let remaining = views::remaining_count(&list);
    let total = views::total_count(&list);
    let completed = views::is_list_completed(&list);
    let TodoList { id, name, todos } = list;

    let todos = views::sort_for_display(todos, |todo| todo.completed)
        .into_iter()
        .map(|todo| TodoView {
            id: todo.id.to_string(),
            name: todo.name,
            completed: todo.completed,
        })
        .collect();

    ListDetail {
        id: id.to_string(),
        name,
        todos,
        remaining,
        total,
        completed,
    }
}

/// Lists every list with its completion summary.
pub async fn list_lists<S: TodoStore>(
    State(state): State<SharedState<S>>,
) -> ServerResult<Json<ListListsResponse>> {
    let lists = state.store.all_lists().await?;
    let lists = views::sort_for_display(lists, views::is_list_completed)
        .iter()
        .map(summarize)
        .collect();

    Ok(Json(ListListsResponse { lists }))
}

/// Creates a new list.
pub async fn create_list<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<CreateListRequest>,
) -> ServerResult<Json<ListMutationResponse>> {
    let name = request.name.trim().to_string();

    // Snapshot immediately before validating to keep the window between
    // the uniqueness check and the insert small.
    let existing = state.store.all_lists().await?;
    validate_list_name(&name, &existing)?;

    state.store.create_new_list(&name).await?;

    tracing::info!(name = %name, "List created");

    Ok(Json(ListMutationResponse {}))
}

/// Gets a list by id.
pub async fn get_list<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<GetListRequest>,
) -> ServerResult<Json<GetListResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;

    let list = state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    Ok(Json(GetListResponse {
        list: to_detail(list),
    }))
}

/// Renames a list.
pub async fn update_list<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<UpdateListRequest>,
) -> ServerResult<Json<ListMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    let name = request.name.trim().to_string();
    let existing = state.store.all_lists().await?;
    validate_list_name(&name, &existing)?;

    state.store.update_list_name(&list_id, &name).await?;

    tracing::info!(list_id = %list_id, name = %name, "List renamed");

    Ok(Json(ListMutationResponse {}))
}

/// Deletes a list together with its todos.
pub async fn delete_list<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<DeleteListRequest>,
) -> ServerResult<Json<ListMutationResponse>> {
    let list_id = parse_list_id::<S>(&request.list_id)?;

    state
        .store
        .find_list(&list_id)
        .await?
        .ok_or_else(|| list_not_found(&list_id))?;

    state.store.delete_list(&list_id).await?;

    tracing::info!(list_id = %list_id, "List deleted");

    Ok(Json(ListMutationResponse {}))
}
