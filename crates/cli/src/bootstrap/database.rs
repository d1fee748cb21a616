use sqlx::SqlitePool;
use tracing::{error, info, warn};
use zonestore_dns_domain::DatabaseConfig;
use zonestore_dns_infrastructure::database::{create_pool, provision_schema};

/// Builds the lazy pool and provisions the schema when configured to.
/// Provisioning failures are logged and do not stop startup.
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(dsn = %cfg.dsn, "Initializing zone store");

    let pool = create_pool(cfg).map_err(|e| {
        error!(error = %e, "Invalid zone store connection settings");
        anyhow::anyhow!(e)
    })?;

    if cfg.create_tables {
        if let Err(e) = provision_schema(&pool, &cfg.zones_table, &cfg.records_table).await {
            warn!(error = %e, "Schema provisioning failed, continuing");
        }
    }

    info!(
        max_open = cfg.max_open_conns,
        max_idle = cfg.max_idle_conns,
        "Zone store pool ready"
    );

    Ok(pool)
}
