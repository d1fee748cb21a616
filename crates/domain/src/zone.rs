use std::sync::Arc;

/// Label separator of domain names.
pub const ZONE_SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: i64,
    pub name: Arc<str>,
}

impl Zone {
    pub fn new(id: i64, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Decomposition of a query name into its registered zone and the host
/// prefix below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLocation {
    pub zone_id: i64,
    pub host: Arc<str>,
    pub zone: Arc<str>,
}

impl ZoneLocation {
    pub fn new(zone_id: i64, host: impl Into<Arc<str>>, zone: impl Into<Arc<str>>) -> Self {
        Self {
            zone_id,
            host: host.into(),
            zone: zone.into(),
        }
    }
}

/// Lowercases a query name and strips the trailing root dot.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches(ZONE_SEPARATOR).to_ascii_lowercase()
}

/// Drops the leftmost label of `name`. Returns `None` for single-label names.
pub fn parent_name(name: &str) -> Option<&str> {
    name.split_once(ZONE_SEPARATOR)
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
}

pub fn label_count(name: &str) -> usize {
    if name.is_empty() {
        0
    } else {
        name.split(ZONE_SEPARATOR).count()
    }
}
