use sqlx::SqlitePool;
use std::sync::Arc;
use zonestore_dns_domain::DatabaseConfig;
use zonestore_dns_infrastructure::repositories::{SqliteRecordRepository, SqliteZoneRepository};

pub struct Repositories {
    pub zones: Arc<SqliteZoneRepository>,
    pub records: Arc<SqliteRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let templates = cfg.query_templates()?;
        Ok(Self {
            zones: Arc::new(SqliteZoneRepository::new(pool.clone(), templates.zones)),
            records: Arc::new(SqliteRecordRepository::new(pool, templates.records)),
        })
    }
}
