use serde::Deserialize;

use crate::domain::api_key::{
    ApiKeyRegistry, RateLimitConfig, DEFAULT_EXEMPT_PATHS, DEFAULT_HEADER_NAME,
    DEFAULT_QUERY_PARAMETER,
};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub steam: SteamConfig,
    pub api_key: ApiKeyConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream connection settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    /// Shared credential appended to every versioned call
    pub api_key: String,
    pub base_url: String,
    pub store_base_url: String,
    pub timeout_seconds: u64,
    /// Reported on the status endpoint; requests are not retried
    pub max_retries: u32,
    pub enable_logging: bool,
}

/// Inbound credential settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiKeyConfig {
    pub valid_api_keys: Vec<String>,
    pub require_api_key: bool,
    pub header_name: String,
    pub query_parameter_name: String,
    pub exempt_paths: Vec<String>,
    pub rate_limit: RateLimitConfig,
}

/// Cross-origin settings; the layer is only installed when enabled
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// Empty or `*` allows any origin
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub preflight_max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
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

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.steampowered.com".to_string(),
            store_base_url: "https://store.steampowered.com/api".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            enable_logging: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: ["Content-Type", "X-API-Key", "Authorization"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            exposed_headers: Vec::new(),
            allow_credentials: false,
            preflight_max_age_seconds: 86400,
        }
    }
}

impl std::fmt::Debug for SteamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamConfig")
            .field("api_key_configured", &!self.api_key.is_empty())
            .field("base_url", &self.base_url)
            .field("store_base_url", &self.store_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .field("enable_logging", &self.enable_logging)
            .finish()
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            valid_api_keys: Vec::new(),
            require_api_key: true,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            query_parameter_name: DEFAULT_QUERY_PARAMETER.to_string(),
            exempt_paths: DEFAULT_EXEMPT_PATHS.iter().map(|p| p.to_string()).collect(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ApiKeyConfig {
    /// Build the immutable registry used by the gateway middleware
    pub fn to_registry(&self) -> Result<ApiKeyRegistry, DomainError> {
        let invalid = |e: crate::domain::ApiKeyValidationError| {
            DomainError::configuration(format!("Invalid api_key configuration: {}", e))
        };

        let registry = ApiKeyRegistry::new(self.valid_api_keys.iter().cloned())
            .map_err(invalid)?
            .with_require_api_key(self.require_api_key)
            .with_header_name(&self.header_name)
            .map_err(invalid)?
            .with_query_parameter_name(&self.query_parameter_name)
            .map_err(invalid)?
            .with_exempt_paths(self.exempt_paths.iter().cloned())
            .map_err(invalid)?
            .with_rate_limit(self.rate_limit);

        Ok(registry)
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
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("api_key.valid_api_keys")
                    .with_list_parse_key("api_key.exempt_paths")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers")
                    .with_list_parse_key("cors.exposed_headers"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject configurations the gateway cannot serve with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.steam.api_key.trim().is_empty() {
            return Err(DomainError::configuration(
                "steam.api_key must be set (APP__STEAM__API_KEY)",
            ));
        }

        if self.steam.timeout_seconds == 0 {
            return Err(DomainError::configuration(
                "steam.timeout_seconds must be greater than zero",
            ));
        }

        if self.api_key.require_api_key && self.api_key.valid_api_keys.is_empty() {
            tracing::warn!("API keys are required but none are configured; every request will be rejected");
        }

        Ok(())
    }
}
