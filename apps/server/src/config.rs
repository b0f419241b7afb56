//! Server configuration.

use std::env;

/// Which storage backend serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Per-session in-memory storage.
    Session,
    /// SQLite database shared across requests.
    Database,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Storage backend selection.
    pub backend: StoreBackend,
    /// Database URL (used by the database backend).
    pub database_url: String,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = match env::var("TODO_STORE_BACKEND") {
            Ok(value) => match value.to_lowercase().as_str() {
                "session" => StoreBackend::Session,
                "database" => StoreBackend::Database,
                other => anyhow::bail!("unknown TODO_STORE_BACKEND: {other}"),
            },
            Err(_) => StoreBackend::Session,
        };

        Ok(Self {
            host: env::var("TODO_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TODO_SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            backend,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:todos.db?mode=rwc".to_string()),
            log_level: env::var("TODO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
