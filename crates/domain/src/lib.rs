//! zonestore-dns domain layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod zone;

pub use config::{
    CliOverrides, Config, ConfigError, DatabaseConfig, DegradeConfig, DnsConfig, HeartbeatConfig,
    LoggingConfig, QueryTemplates, ServerConfig,
};
pub use dns_record::{RecordType, ZoneRecord, APEX_HOST, WILDCARD_HOST};
pub use dns_request::{DnsRequest, ResolutionKey};
pub use errors::DomainError;
pub use zone::{Zone, ZoneLocation, ZONE_SEPARATOR};
