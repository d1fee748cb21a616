use crate::zone::normalize_name;
use crate::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(domain: impl AsRef<str>, record_type: RecordType, client_ip: IpAddr) -> Self {
        Self {
            domain: Arc::from(normalize_name(domain.as_ref())),
            record_type,
            client_ip,
        }
    }

    pub fn resolution_key(&self) -> ResolutionKey {
        ResolutionKey::new(Arc::clone(&self.domain), self.record_type)
    }
}

/// Identifies one resolution attempt and one degrade cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub fqdn: Arc<str>,
    pub record_type: RecordType,
}

impl ResolutionKey {
    pub fn new(fqdn: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            fqdn: fqdn.into(),
            record_type,
        }
    }
}
