use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{error, info};
use zonestore_dns_domain::{DatabaseConfig, DomainError};

/// Builds the connection pool without opening a connection, so startup
/// succeeds even while the store is unreachable.
pub fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.dsn)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_open_conns)
        // sqlx has no idle cap; the idle count becomes the pool floor.
        .min_connections(config.max_idle_conns)
        .idle_timeout(config.conn_max_idle_time())
        .max_lifetime(config.conn_max_lifetime())
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options);

    Ok(pool)
}

/// Creates the zone and record tables if they are missing.
///
/// Table names must already be validated identifiers.
pub async fn provision_schema(
    pool: &SqlitePool,
    zones_table: &str,
    records_table: &str,
) -> Result<(), DomainError> {
    let statements = [
        format!(
            "CREATE TABLE IF NOT EXISTS {zones} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                zone_name TEXT NOT NULL UNIQUE
            )",
            zones = zones_table
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {records} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                zone_id INTEGER NOT NULL REFERENCES {zones}(id),
                hostname TEXT NOT NULL,
                type TEXT NOT NULL,
                data TEXT NOT NULL,
                ttl INTEGER NOT NULL DEFAULT 120,
                online INTEGER NOT NULL DEFAULT 0
            )",
            records = records_table,
            zones = zones_table
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{records}_lookup ON {records} (zone_id, hostname, type)",
            records = records_table
        ),
    ];

    for statement in &statements {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            error!(error = %e, "Failed to provision schema");
            DomainError::Provision(e.to_string())
        })?;
    }

    info!(zones_table, records_table, "Schema provisioned");
    Ok(())
}
