use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::degrade::DegradeConfig;
use super::dns::{default_ttl, DnsConfig};
use super::errors::ConfigError;
use super::heartbeat::HeartbeatConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "zonestore-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/zonestore-dns/config.toml";

/// Main configuration structure, consumed as an immutable snapshot once loaded.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone/record store connection and queries
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    /// Zone catalog refresh cadence
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,

    #[serde(default)]
    pub degrade: DegradeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonestore-dns.toml in current directory
    /// 3. /etc/zonestore-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dsn) = overrides.dsn {
            self.database.dsn = dsn;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Out-of-range numeric settings fall back to their defaults instead of
    /// failing the load.
    pub fn normalize(&mut self) {
        if self.dns.default_ttl == 0 {
            self.dns.default_ttl = default_ttl();
        }
        self.database.normalize();
        self.heartbeat.normalize();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        self.database.validate()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub dsn: Option<String>,
    pub log_level: Option<String>,
}
