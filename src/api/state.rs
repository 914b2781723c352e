//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::infrastructure::api_key::{KeyAuthenticator, SlidingWindowRateLimiter};
use crate::infrastructure::steam::SteamClient;

/// Application state shared by the gateway middleware and every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub authenticator: KeyAuthenticator,
    pub rate_limiter: Arc<SlidingWindowRateLimiter>,
    pub steam_client: SteamClient,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        authenticator: KeyAuthenticator,
        steam_client: SteamClient,
        config: Arc<AppConfig>,
    ) -> Self {
        let rate_limiter = Arc::new(SlidingWindowRateLimiter::new(
            *authenticator.registry().rate_limit(),
        ));

        Self {
            authenticator,
            rate_limiter,
            steam_client,
            config,
        }
    }
}
