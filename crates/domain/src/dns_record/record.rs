use super::RecordType;
use std::sync::Arc;

/// Host label of records that live on the zone apex.
pub const APEX_HOST: &str = "@";

/// Host label of wildcard records.
pub const WILDCARD_HOST: &str = "*";

/// A record row owned by a zone, as returned by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub zone_id: i64,

    pub hostname: Arc<str>,

    /// Name of the owning zone, without trailing dot.
    pub zone: Arc<str>,

    pub record_type: RecordType,

    pub data: Arc<str>,

    /// TTL as stored; non-positive values fall back to the configured default.
    pub ttl: i64,
}

impl ZoneRecord {
    pub fn new(
        zone_id: i64,
        hostname: impl Into<Arc<str>>,
        zone: impl Into<Arc<str>>,
        record_type: RecordType,
        data: impl Into<Arc<str>>,
        ttl: i64,
    ) -> Self {
        Self {
            zone_id,
            hostname: hostname.into(),
            zone: zone.into(),
            record_type,
            data: data.into(),
            ttl,
        }
    }

    /// Fully-qualified owner name of the record (`host.zone`, or the zone
    /// itself for apex records).
    pub fn owner_name(&self) -> String {
        if self.hostname.as_ref() == APEX_HOST || self.hostname.is_empty() {
            self.zone.to_string()
        } else {
            format!("{}.{}", self.hostname, self.zone)
        }
    }

    pub fn effective_ttl(&self, default_ttl: u32) -> u32 {
        if self.ttl <= 0 {
            default_ttl
        } else {
            u32::try_from(self.ttl).unwrap_or(u32::MAX)
        }
    }
}
