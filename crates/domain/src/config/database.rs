use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder substituted with the configured table name in query templates.
pub const TABLE_PLACEHOLDER: &str = "{table}";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL of the zone/record store.
    #[serde(default = "default_dsn")]
    pub dsn: String,

    #[serde(default = "default_zones_table")]
    pub zones_table: String,

    #[serde(default = "default_records_table")]
    pub records_table: String,

    /// Mapped to the pool's minimum connection count. sqlx keeps that many
    /// connections open instead of capping idle ones, so this is a floor
    /// rather than a ceiling. Clamped to `max_open_conns`.
    #[serde(default = "default_max_idle_conns")]
    pub max_idle_conns: u32,

    #[serde(default = "default_max_open_conns")]
    pub max_open_conns: u32,

    #[serde(default = "default_conn_max_idle_time_secs")]
    pub conn_max_idle_time_secs: u64,

    #[serde(default = "default_conn_max_lifetime_secs")]
    pub conn_max_lifetime_secs: u64,

    /// How long a lookup waits for a pooled connection before failing.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Create the zone and record tables at startup when missing.
    #[serde(default = "default_true")]
    pub create_tables: bool,

    #[serde(default = "default_query_zone_sql")]
    pub query_zone_sql: String,

    #[serde(default = "default_query_record_sql")]
    pub query_record_sql: String,
}

/// Zone and record queries with the table names already bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplates {
    pub zones: String,
    pub records: String,
}

impl DatabaseConfig {
    pub fn conn_max_idle_time(&self) -> Duration {
        Duration::from_secs(self.conn_max_idle_time_secs)
    }

    pub fn conn_max_lifetime(&self) -> Duration {
        Duration::from_secs(self.conn_max_lifetime_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Binds the configured table names into both query templates.
    pub fn query_templates(&self) -> Result<QueryTemplates, ConfigError> {
        validate_table_name(&self.zones_table)?;
        validate_table_name(&self.records_table)?;

        Ok(QueryTemplates {
            zones: self.query_zone_sql.replace(TABLE_PLACEHOLDER, &self.zones_table),
            records: self
                .query_record_sql
                .replace(TABLE_PLACEHOLDER, &self.records_table),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dsn.trim().is_empty() {
            return Err(ConfigError::Validation("Database DSN cannot be empty".to_string()));
        }
        self.query_templates().map(|_| ())
    }

    /// Replaces zero pool settings with defaults and keeps the idle
    /// connection count within the open connection limit.
    pub(crate) fn normalize(&mut self) {
        if self.max_open_conns == 0 {
            self.max_open_conns = default_max_open_conns();
        }
        if self.max_idle_conns == 0 {
            self.max_idle_conns = default_max_idle_conns();
        }
        self.max_idle_conns = self.max_idle_conns.min(self.max_open_conns);
        if self.conn_max_idle_time_secs == 0 {
            self.conn_max_idle_time_secs = default_conn_max_idle_time_secs();
        }
        if self.conn_max_lifetime_secs == 0 {
            self.conn_max_lifetime_secs = default_conn_max_lifetime_secs();
        }
        if self.acquire_timeout_secs == 0 {
            self.acquire_timeout_secs = default_acquire_timeout_secs();
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            zones_table: default_zones_table(),
            records_table: default_records_table(),
            max_idle_conns: default_max_idle_conns(),
            max_open_conns: default_max_open_conns(),
            conn_max_idle_time_secs: default_conn_max_idle_time_secs(),
            conn_max_lifetime_secs: default_conn_max_lifetime_secs(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            create_tables: true,
            query_zone_sql: default_query_zone_sql(),
            query_record_sql: default_query_record_sql(),
        }
    }
}

fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(ConfigError::Validation(format!(
            "Invalid table name '{}' (only letters, digits and underscores are allowed)",
            name
        )));
    }
    Ok(())
}

fn default_dsn() -> String {
    "sqlite:./zonestore-dns.db".to_string()
}

fn default_zones_table() -> String {
    "zones".to_string()
}

fn default_records_table() -> String {
    "records".to_string()
}

fn default_max_idle_conns() -> u32 {
    10
}

fn default_max_open_conns() -> u32 {
    20
}

fn default_conn_max_idle_time_secs() -> u64 {
    600
}

fn default_conn_max_lifetime_secs() -> u64 {
    3600
}

fn default_acquire_timeout_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

fn default_query_zone_sql() -> String {
    "SELECT id, zone_name FROM {table}".to_string()
}

fn default_query_record_sql() -> String {
    "SELECT hostname, type, data, ttl FROM {table} \
     WHERE zone_id = ? AND hostname = ? AND type = ? AND online != 0 ORDER BY id"
        .to_string()
}
