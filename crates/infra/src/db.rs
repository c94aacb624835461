use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub type Db = PgPool;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Open the process-wide pool. Callers own it and are expected to `close()` it on shutdown.
pub async fn connect(config: &DbConfig) -> sqlx::Result<Db> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Some(Duration::from_secs(600))) // 10 minutes
        .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
        .connect(&config.url)
        .await
}

/// Build a pool without opening a connection; the first query connects.
pub fn connect_lazy(config: &DbConfig) -> sqlx::Result<Db> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_lazy(&config.url)
}

pub async fn migrate(db: &Db) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(db).await
}
