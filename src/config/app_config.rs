use serde::Deserialize;

use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// HTTP listener settings. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` for the prediction form
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the regression model lives and how often it is read
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    pub load_policy: LoadPolicy,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Load on first use and share the handle
    #[default]
    Cached,
    /// Re-read the artifact for every prediction
    PerCall,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "models/resale_flat_prices.json".to_string(),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings that would only fail later, at request time
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.path.trim().is_empty() {
            return Err(DomainError::configuration("model.path must not be empty"));
        }

        if self.server.static_dir.trim().is_empty() {
            return Err(DomainError::configuration("server.static_dir must not be empty"));
        }

        if self.metrics.enabled && !self.metrics.path.starts_with('/') {
            return Err(DomainError::configuration(format!(
                "metrics.path must start with '/', got '{}'",
                self.metrics.path
            )));
        }

        Ok(())
    }
}
