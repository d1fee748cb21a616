use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL served for records whose stored TTL is zero or negative.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
        }
    }
}

pub(crate) fn default_ttl() -> u32 {
    120
}
