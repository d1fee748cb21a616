use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use zonestore_dns_application::ports::ZoneRepository;
use zonestore_dns_domain::{DomainError, ZoneLocation};

/// Zone repository whose reload can be toggled between success and failure.
pub struct MockZoneRepository {
    reload_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
    zone_count: usize,
}

impl MockZoneRepository {
    pub fn new(zone_count: usize) -> Self {
        Self {
            reload_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            zone_count,
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn reload_count(&self) -> u64 {
        self.reload_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    fn resolve_name(&self, fqdn: &str) -> Result<ZoneLocation, DomainError> {
        Err(DomainError::ZoneResolution(fqdn.to_string()))
    }

    fn lookup_zone_id(&self, _zone: &str) -> Option<i64> {
        None
    }

    async fn reload(&self) -> Result<usize, DomainError> {
        self.reload_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::RecordFetch("Mock store unavailable".to_string()));
        }
        Ok(self.zone_count)
    }
}
