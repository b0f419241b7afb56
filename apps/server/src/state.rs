//! Application state.

use std::sync::Arc;

use todo_store::TodoStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: TodoStore> {
    /// Server configuration.
    pub config: Config,
    /// Storage backend.
    pub store: S,
}

impl<S: TodoStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: TodoStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
