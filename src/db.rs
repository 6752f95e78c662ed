//! Database backend selection and pool construction. One binary serves PostgreSQL or SQLite,
//! picked at runtime from the connection string.

use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or(url);
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabase(scheme.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Postgres => "postgres",
            Backend::Sqlite => "sqlite",
        }
    }
}

/// True for SQLite URLs whose data lives only inside a single connection.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool for `url`. In-memory SQLite is pinned to one long-lived connection so every
/// request sees the same database.
pub async fn connect(url: &str, max_connections: u32) -> Result<(AnyPool, Backend), AppError> {
    let backend = Backend::from_url(url)?;
    sqlx::any::install_default_drivers();

    let mut options = AnyPoolOptions::new().max_connections(max_connections);
    if backend == Backend::Sqlite && is_in_memory(url) {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = options.connect(url).await?;
    tracing::debug!(backend = backend.name(), "database pool ready");
    Ok((pool, backend))
}
