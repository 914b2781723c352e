//! Liveness and configuration status endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::state::AppState;

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Gateway configuration summary; never includes credentials
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub steam_api_key_configured: bool,
    pub api_key_auth_enabled: bool,
    pub rate_limit_enabled: bool,
    pub cors_enabled: bool,
    pub base_url: String,
    pub store_base_url: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub enable_logging: bool,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub status: HealthStatus,
}

/// GET /health and GET /api/status/health
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    debug!("Status endpoint called");

    let steam = &state.config.steam;
    let registry = state.authenticator.registry();

    Json(StatusResponse {
        steam_api_key_configured: state.steam_client.translator().has_api_key(),
        api_key_auth_enabled: registry.require_api_key(),
        rate_limit_enabled: state.rate_limiter.config().enabled,
        cors_enabled: state.config.cors.enabled,
        base_url: steam.base_url.clone(),
        store_base_url: steam.store_base_url.clone(),
        timeout_seconds: steam.timeout_seconds,
        max_retries: steam.max_retries,
        enable_logging: steam.enable_logging,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        status: HealthStatus::Healthy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_health_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"Healthy\"");
    }
}
