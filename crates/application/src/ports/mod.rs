mod degrade_cache_port;
mod query_responder;
mod record_repository;
mod zone_repository;

pub use degrade_cache_port::{DegradeCachePort, DegradeEntry};
pub use query_responder::QueryResponder;
pub use record_repository::RecordRepository;
pub use zone_repository::ZoneRepository;
