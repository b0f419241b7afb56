//! Todo service HTTP server.
//!
//! Serves the JSON API over either storage backend behind the shared
//! `TodoStore` trait: lists live in the user's session blob or in a SQLite
//! database, selected by configuration at startup.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::Router;
use todo_store::TodoStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{SharedState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: TodoStore + 'static>(state: SharedState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: TodoStore>(config: Config, store: S) -> SharedState<S> {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
