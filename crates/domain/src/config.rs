pub mod database;
pub mod degrade;
pub mod dns;
pub mod errors;
pub mod heartbeat;
pub mod logging;
pub mod root;
pub mod server;

pub use database::{DatabaseConfig, QueryTemplates};
pub use degrade::DegradeConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use heartbeat::HeartbeatConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
