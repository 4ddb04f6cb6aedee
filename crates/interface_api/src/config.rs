//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable prefix (`PORTAL_PORT`, `PORTAL_FIXTURE_PATH`, ...)
pub const ENV_PREFIX: &str = "PORTAL";

/// API configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Fixture document to serve; the bundled demo portfolio when unset
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
    /// Log level, used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            fixture_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `PORTAL_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from any source layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
