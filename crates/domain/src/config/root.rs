use serde::{Deserialize, Serialize};

use super::bridge::BridgeConfig;
use super::errors::ConfigError;
use super::firewall_api::FirewallApiConfig;
use super::logging::LoggingConfig;
use super::scheduler::SchedulerConfig;
use super::telemetry::TelemetryConfig;

const LOCAL_CONFIG_PATH: &str = "seer.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/seer/config.toml";

/// Main configuration structure for the SEER agent
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Message bridge to the router flow
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Firewall management REST API
    #[serde(default)]
    pub firewall_api: FirewallApiConfig,

    /// Policy evaluation and polling timers
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// CPU history cache
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. seer.toml in current directory
    /// 3. /etc/seer/config.toml
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
        if let Some(address) = overrides.bridge_address {
            self.bridge.address = address;
        }
        if let Some(url) = overrides.api_url {
            self.firewall_api.base_url = Some(url);
        }
        if let Some(path) = overrides.cache_path {
            self.telemetry.cache_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.json_logs {
            self.logging.json = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bridge.address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bridge address cannot be empty".to_string(),
            ));
        }

        if self.scheduler.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Scheduler interval cannot be 0".to_string(),
            ));
        }

        if self.scheduler.firewall_status_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Firewall status interval cannot be 0".to_string(),
            ));
        }

        if self.firewall_api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Firewall API timeout cannot be 0".to_string(),
            ));
        }

        if self.telemetry.history_len == 0 {
            return Err(ConfigError::Validation(
                "Telemetry history length cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bridge_address: Option<String>,
    pub api_url: Option<String>,
    pub cache_path: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}
