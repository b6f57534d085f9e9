//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, LoadPolicy, LogFormat, LoggingConfig, MetricsConfig, ModelConfig, ServerConfig,
};
