pub mod degrade_cache;
pub mod record_type_map;
pub mod server;

pub use degrade_cache::{DegradeCache, DegradeCacheMetrics};
pub use record_type_map::RecordTypeMapper;
pub use server::{ServFailHandler, ZoneStoreHandler};
