use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use zonestore_dns_application::ports::{
    DegradeCachePort, DegradeEntry, QueryResponder, RecordRepository, ZoneRepository,
};
use zonestore_dns_domain::zone::parent_name;
use zonestore_dns_domain::{
    DomainError, RecordType, ResolutionKey, ZoneLocation, ZoneRecord, APEX_HOST,
};

pub struct MockZoneRepository {
    zones: RwLock<HashMap<String, i64>>,
    next_id: AtomicUsize,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn add_zone(&self, name: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        self.zones.write().unwrap().insert(name.to_string(), id);
        id
    }

    pub fn clear(&self) {
        self.zones.write().unwrap().clear();
    }
}

impl Default for MockZoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    fn resolve_name(&self, fqdn: &str) -> Result<ZoneLocation, DomainError> {
        let zones = self.zones.read().unwrap();
        let mut candidate = Some(fqdn);
        while let Some(zone) = candidate {
            if let Some(id) = zones.get(zone) {
                let host = if zone.len() == fqdn.len() {
                    APEX_HOST.to_string()
                } else {
                    fqdn[..fqdn.len() - zone.len() - 1].to_string()
                };
                return Ok(ZoneLocation::new(*id, host, zone));
            }
            candidate = parent_name(zone);
        }
        Err(DomainError::ZoneResolution(format!("No zone for {}", fqdn)))
    }

    fn lookup_zone_id(&self, zone: &str) -> Option<i64> {
        self.zones.read().unwrap().get(zone).copied()
    }

    async fn reload(&self) -> Result<usize, DomainError> {
        Ok(self.zones.read().unwrap().len())
    }
}

pub struct MockRecordRepository {
    records: RwLock<Vec<ZoneRecord>>,
    should_fail: AtomicBool,
    failing_hosts: RwLock<HashSet<String>>,
    calls: AtomicUsize,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            should_fail: AtomicBool::new(false),
            failing_hosts: RwLock::new(HashSet::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn add_record(
        &self,
        zone_id: i64,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        data: &str,
        ttl: i64,
    ) {
        self.records.write().unwrap().push(ZoneRecord::new(
            zone_id,
            hostname,
            zone,
            record_type,
            data,
            ttl,
        ));
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Makes lookups for `host` fail while other hosts keep working.
    pub fn fail_host(&self, host: &str) {
        self.failing_hosts.write().unwrap().insert(host.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn get_records(
        &self,
        zone_id: i64,
        host: &str,
        _zone: &str,
        record_type: RecordType,
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::RecordFetch("Mock store unavailable".to_string()));
        }
        if self.failing_hosts.read().unwrap().contains(host) {
            return Err(DomainError::RecordFetch(format!("Mock failure for {}", host)));
        }

        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| {
                r.zone_id == zone_id && r.hostname.as_ref() == host && r.record_type == record_type
            })
            .cloned()
            .collect())
    }
}

/// Mutex-guarded degrade cache that counts writes.
pub struct CountingDegradeCache {
    entries: Mutex<HashMap<ResolutionKey, Arc<DegradeEntry>>>,
    writes: AtomicUsize,
}

impl CountingDegradeCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for CountingDegradeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradeCachePort for CountingDegradeCache {
    fn get(&self, key: &ResolutionKey) -> Option<Arc<DegradeEntry>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: ResolutionKey, entry: Arc<DegradeEntry>) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(key, entry);
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Records replies and successor invocations instead of touching the wire.
pub struct MockResponder {
    pub replies: Vec<Vec<Record>>,
    pub pass_throughs: usize,
    pub next_code: ResponseCode,
}

impl MockResponder {
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
            pass_throughs: 0,
            next_code: ResponseCode::Refused,
        }
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryResponder for MockResponder {
    async fn write_reply(&mut self, answers: &[Record]) -> Result<(), DomainError> {
        self.replies.push(answers.to_vec());
        Ok(())
    }

    async fn pass_through(&mut self) -> Result<ResponseCode, DomainError> {
        self.pass_throughs += 1;
        Ok(self.next_code)
    }
}
