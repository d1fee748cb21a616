use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tracing::{debug, info};
use zonestore_dns_application::ports::{DegradeCachePort, DegradeEntry};
use zonestore_dns_domain::ResolutionKey;

#[derive(Debug, Default)]
pub struct DegradeCacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub writes: AtomicU64,
    /// New keys turned away because the cache was full.
    pub rejected: AtomicU64,
}

impl DegradeCacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}

/// Last-known-good answers keyed by `(fqdn, type)`.
///
/// Entries never expire. With a non-zero `max_entries` the cache stops
/// admitting new keys once full; keys already present keep being refreshed.
/// The bound is checked without a global lock and may be overshot by
/// concurrent inserts.
pub struct DegradeCache {
    entries: DashMap<ResolutionKey, Arc<DegradeEntry>>,
    max_entries: usize,
    metrics: DegradeCacheMetrics,
}

impl DegradeCache {
    /// `max_entries == 0` means unbounded.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
            metrics: DegradeCacheMetrics::default(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn metrics(&self) -> &DegradeCacheMetrics {
        &self.metrics
    }

    pub fn log_stats(&self) {
        info!(
            entries = self.entries.len(),
            hits = self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses = self.metrics.misses.load(AtomicOrdering::Relaxed),
            writes = self.metrics.writes.load(AtomicOrdering::Relaxed),
            rejected = self.metrics.rejected.load(AtomicOrdering::Relaxed),
            hit_rate = format!("{:.1}%", self.metrics.hit_rate()),
            "Degrade cache stats"
        );
    }

    fn is_full(&self) -> bool {
        self.max_entries > 0 && self.entries.len() >= self.max_entries
    }
}

impl Default for DegradeCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DegradeCachePort for DegradeCache {
    fn get(&self, key: &ResolutionKey) -> Option<Arc<DegradeEntry>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    fn put(&self, key: ResolutionKey, entry: Arc<DegradeEntry>) {
        if let Some(mut existing) = self.entries.get_mut(&key) {
            *existing = entry;
            self.metrics.writes.fetch_add(1, AtomicOrdering::Relaxed);
            return;
        }

        if self.is_full() {
            self.metrics.rejected.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(fqdn = %key.fqdn, record_type = %key.record_type, "Degrade cache full, entry not admitted");
            return;
        }

        self.entries.insert(key, entry);
        self.metrics.writes.fetch_add(1, AtomicOrdering::Relaxed);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
