use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};
use zonestore_dns_application::ports::RecordRepository;
use zonestore_dns_domain::{DomainError, RecordType, ZoneRecord};

type RecordRow = (String, String, String, i64);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
    query: String,
}

impl SqliteRecordRepository {
    /// `query` takes `(zone_id, hostname, type)` and must select
    /// `(hostname, type, data, ttl)` rows of online records.
    pub fn new(pool: SqlitePool, query: impl Into<String>) -> Self {
        Self {
            pool,
            query: query.into(),
        }
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn get_records(
        &self,
        zone_id: i64,
        host: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&self.query)
            .bind(zone_id)
            .bind(host)
            .bind(record_type.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query records");
                DomainError::RecordFetch(e.to_string())
            })?;

        let records = rows
            .into_iter()
            .filter_map(|(hostname, rtype, data, ttl)| match rtype.parse::<RecordType>() {
                Ok(parsed) => Some(ZoneRecord::new(zone_id, hostname, zone, parsed, data, ttl)),
                Err(e) => {
                    warn!(hostname = %hostname, error = %e, "Skipping record with unknown type");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}
