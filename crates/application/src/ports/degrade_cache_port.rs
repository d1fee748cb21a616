use hickory_proto::rr::Record;
use std::sync::Arc;
use zonestore_dns_domain::ResolutionKey;

/// Last answer successfully produced for a resolution key.
///
/// `rr_strings[i]` is the presentation form of `records[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegradeEntry {
    pub rr_strings: Vec<String>,
    pub records: Vec<Record>,
}

impl DegradeEntry {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared store of last-known-good answers, read when live resolution fails.
/// Implementations must be safe under concurrent reads and writes.
pub trait DegradeCachePort: Send + Sync {
    fn get(&self, key: &ResolutionKey) -> Option<Arc<DegradeEntry>>;

    /// Unconditionally overwrites the entry stored under `key`.
    fn put(&self, key: ResolutionKey, entry: Arc<DegradeEntry>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
