use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::resolver::ResolverConfig;

/// Main configuration structure for zonewatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Input list for a monitoring run
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Upstream resolver selection and query timeout
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Posture store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonewatch.toml in current directory
    /// 3. /etc/zonewatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("zonewatch.toml").exists() {
            Self::from_file("zonewatch.toml")?
        } else if std::path::Path::new("/etc/zonewatch/config.toml").exists() {
            Self::from_file("/etc/zonewatch/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(input) = overrides.input_list {
            self.monitor.input_list = input;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.input_list.is_empty() {
            return Err(ConfigError::Validation(
                "Input list path cannot be empty".to_string(),
            ));
        }

        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_list: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub timeout_secs: Option<u64>,
}
