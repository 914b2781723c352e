//! Layered application configuration

mod app_config;

pub use app_config::{
    ApiKeyConfig, AppConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig, SteamConfig,
};
