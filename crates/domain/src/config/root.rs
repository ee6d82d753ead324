use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolution::ResolutionConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-ns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-ns/config.toml";

/// Main configuration structure for Ferrous NS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer sources (zone file, MITM override)
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Recursive upstream
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-ns.toml in current directory
    /// 3. /etc/ferrous-ns/config.toml
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

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(mitm) = overrides.mitm {
            self.resolution.mitm = Some(mitm);
        }
        if let Some(zone_file) = overrides.zone_file {
            self.resolution.zone_file = Some(zone_file);
        }
        if let Some(url) = overrides.upstream_url {
            self.upstream.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if !self.upstream.url.starts_with("https://") && !self.upstream.url.starts_with("http://")
        {
            return Err(ConfigError::Validation(format!(
                "Upstream URL '{}' must be http:// or https://",
                self.upstream.url
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub mitm: Option<Ipv4Addr>,
    pub zone_file: Option<String>,
    pub upstream_url: Option<String>,
    pub log_level: Option<String>,
}
