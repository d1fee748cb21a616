use async_trait::async_trait;
use zonestore_dns_domain::zone::parent_name;
use zonestore_dns_domain::{DomainError, ZoneLocation};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Splits `fqdn` into the longest registered zone suffix and the host
    /// prefix below it. Fails when no suffix is a registered zone.
    fn resolve_name(&self, fqdn: &str) -> Result<ZoneLocation, DomainError>;

    /// Exact-match zone lookup.
    fn lookup_zone_id(&self, zone: &str) -> Option<i64>;

    /// Parent-zone candidate of `fqdn`, used for wildcard lookups.
    fn base_zone_of<'a>(&self, fqdn: &'a str) -> Option<&'a str> {
        parent_name(fqdn)
    }

    /// Reloads the zone catalog from the store and returns the zone count.
    async fn reload(&self) -> Result<usize, DomainError>;
}
