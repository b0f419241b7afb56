//! Todo service server binary.

use std::net::SocketAddr;

use todo_server::{
    config::{Config, StoreBackend},
    create_app, create_state, init_tracing,
};
use todo_store::{DatabaseStore, SessionStore, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(backend = ?config.backend, "Starting todo server");

    match config.backend {
        StoreBackend::Session => serve(config, SessionStore::new()).await,
        StoreBackend::Database => {
            let store = DatabaseStore::connect(&config.database_url).await?;
            serve(config, store).await
        }
    }
}

async fn serve<S: TodoStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = create_state(config, store);
    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
