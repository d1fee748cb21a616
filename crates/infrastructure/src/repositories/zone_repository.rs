use arc_swap::ArcSwap;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use zonestore_dns_application::ports::ZoneRepository;
use zonestore_dns_domain::zone::{normalize_name, parent_name};
use zonestore_dns_domain::{DomainError, Zone, ZoneLocation, APEX_HOST};

type ZoneRow = (i64, String);

/// Zone catalog served from an in-memory snapshot of the zones table.
///
/// Lookups never touch the database; `reload` replaces the whole snapshot
/// atomically.
pub struct SqliteZoneRepository {
    pool: SqlitePool,
    query: String,
    zones: ArcSwap<HashMap<Arc<str>, i64>>,
}

impl SqliteZoneRepository {
    /// `query` must select `(id, zone_name)` rows.
    pub fn new(pool: SqlitePool, query: impl Into<String>) -> Self {
        Self {
            pool,
            query: query.into(),
            zones: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    pub fn zone_count(&self) -> usize {
        self.zones.load().len()
    }

    pub fn snapshot(&self) -> Vec<Zone> {
        let mut zones: Vec<Zone> = self
            .zones
            .load()
            .iter()
            .map(|(name, id)| Zone::new(*id, Arc::clone(name)))
            .collect();
        zones.sort_by_key(|z| z.id);
        zones
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    fn resolve_name(&self, fqdn: &str) -> Result<ZoneLocation, DomainError> {
        let zones = self.zones.load();

        let mut candidate = Some(fqdn);
        while let Some(zone) = candidate {
            if let Some((name, id)) = zones.get_key_value(zone) {
                let host = if zone.len() == fqdn.len() {
                    APEX_HOST
                } else {
                    &fqdn[..fqdn.len() - zone.len() - 1]
                };
                return Ok(ZoneLocation::new(*id, host, Arc::clone(name)));
            }
            candidate = parent_name(zone);
        }

        Err(DomainError::ZoneResolution(format!(
            "No registered zone contains {}",
            fqdn
        )))
    }

    fn lookup_zone_id(&self, zone: &str) -> Option<i64> {
        self.zones.load().get(zone).copied()
    }

    #[instrument(skip(self))]
    async fn reload(&self) -> Result<usize, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(&self.query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to load zones");
                DomainError::RecordFetch(e.to_string())
            })?;

        let zones: HashMap<Arc<str>, i64> = rows
            .into_iter()
            .map(|(id, name)| (Arc::from(normalize_name(&name)), id))
            .collect();
        let count = zones.len();

        let previous = self.zones.swap(Arc::new(zones));
        if previous.len() != count {
            info!(zones = count, previous = previous.len(), "Zone catalog changed");
        } else {
            debug!(zones = count, "Zone catalog reloaded");
        }

        Ok(count)
    }
}
