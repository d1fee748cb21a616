use async_trait::async_trait;
use zonestore_dns_domain::{DomainError, RecordType, ZoneRecord};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Enabled records for `(zone_id, host, record_type)`, in store order.
    /// An empty vector means no match and is distinct from a store failure.
    async fn get_records(
        &self,
        zone_id: i64,
        host: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<Vec<ZoneRecord>, DomainError>;
}
