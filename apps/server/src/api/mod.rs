//! API endpoints.

pub mod list;
pub mod todo;

use axum::{
    Router,
    routing::{get, post},
};
use todo_store::TodoStore;

use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TodoStore + 'static>() -> Router<SharedState<S>> {
    Router::new()
        // List endpoints
        .route("/api/list/list", post(list::list_lists))
        .route("/api/list/create", post(list::create_list))
        .route("/api/list/get", post(list::get_list))
        .route("/api/list/update", post(list::update_list))
        .route("/api/list/delete", post(list::delete_list))
        // Todo endpoints
        .route("/api/todo/create", post(todo::create_todo))
        .route("/api/todo/delete", post(todo::delete_todo))
        .route("/api/todo/update-status", post(todo::update_todo_status))
        .route("/api/todo/complete-all", post(todo::complete_all_todos))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Parses a backend-appropriate list id from its request string form.
pub(crate) fn parse_list_id<S: TodoStore>(raw: &str) -> ServerResult<S::ListId> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid list_id".to_string()))
}

/// Parses a backend-appropriate todo id from its request string form.
pub(crate) fn parse_todo_id<S: TodoStore>(raw: &str) -> ServerResult<S::TodoId> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid todo_id".to_string()))
}

/// Not-found error for a list id, in the wording clients display verbatim.
pub(crate) fn list_not_found(id: &impl std::fmt::Display) -> ServerError {
    ServerError::NotFound(format!("The specified list with id {id} was not found"))
}
