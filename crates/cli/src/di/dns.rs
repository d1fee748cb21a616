use super::Repositories;
use std::sync::Arc;
use tracing::info;
use zonestore_dns_application::services::StoreHealth;
use zonestore_dns_application::use_cases::HandleDnsQueryUseCase;
use zonestore_dns_domain::Config;
use zonestore_dns_infrastructure::dns::{DegradeCache, ZoneStoreHandler};

pub struct DnsServices {
    pub degrade_cache: Arc<DegradeCache>,
    pub store_health: Arc<StoreHealth>,
    pub use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let degrade_cache = Arc::new(DegradeCache::new(config.degrade.max_entries));
        let store_health = Arc::new(StoreHealth::new());

        let use_case = Arc::new(
            HandleDnsQueryUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
                degrade_cache.clone(),
            )
            .with_default_ttl(config.dns.default_ttl)
            .with_store_health(store_health.clone()),
        );

        info!(
            default_ttl = config.dns.default_ttl,
            degrade_max_entries = config.degrade.max_entries,
            "DNS services initialized"
        );

        Self {
            degrade_cache,
            store_health,
            use_case,
        }
    }

    pub fn handler(&self) -> ZoneStoreHandler {
        ZoneStoreHandler::new(self.use_case.clone())
    }
}
