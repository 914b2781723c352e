//! Steam Web API Gateway
//!
//! An authenticated, rate-limited front for the Steam Web API and the Steam
//! Store API:
//! - Client credential authentication (header or query parameter)
//! - Per-credential sliding-window rate limiting
//! - Typed, tolerant decoding of upstream payloads

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::DomainError;
use infrastructure::{
    api_key::KeyAuthenticator,
    steam::{HttpTransport, RequestTranslator, SteamClient, UpstreamTransport},
};
use tracing::info;

/// Create the application state with the reqwest transport
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let transport = HttpTransport::with_timeout(Duration::from_secs(config.steam.timeout_seconds))?;
    create_app_state_with_transport(config, Arc::new(transport))
}

/// Create the application state over an arbitrary upstream transport
pub fn create_app_state_with_transport(
    config: &AppConfig,
    transport: Arc<dyn UpstreamTransport>,
) -> Result<AppState, DomainError> {
    config.validate()?;

    let registry = config.api_key.to_registry()?;
    info!(
        keys = registry.key_count(),
        require_api_key = registry.require_api_key(),
        rate_limit_enabled = registry.rate_limit().enabled,
        "API key registry initialized"
    );

    let translator = RequestTranslator::new(
        &config.steam.base_url,
        &config.steam.store_base_url,
        &config.steam.api_key,
    );
    let steam_client =
        SteamClient::new(translator, transport).with_logging(config.steam.enable_logging);

    Ok(AppState::new(
        KeyAuthenticator::new(Arc::new(registry)),
        steam_client,
        Arc::new(config.clone()),
    ))
}
