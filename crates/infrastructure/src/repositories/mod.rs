pub mod record_repository;
pub mod zone_repository;

pub use record_repository::SqliteRecordRepository;
pub use zone_repository::SqliteZoneRepository;
