// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Build the PostgreSQL pool shared by every repository

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Build the PostgreSQL connection pool
/// DOCUMENTATION: Sizing and acquire timeout come from DB_MAX_CONNECTIONS
/// and DB_CONNECTION_TIMEOUT; called once during startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Initializing database pool (max_connections={}, acquire_timeout={}s)",
        config.db_max_connections,
        config.db_connection_timeout
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Recycle idle and long-lived connections
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // One round trip before the server starts taking traffic
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool ready");
    Ok(pool)
}
