use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{build_cors_layer, gateway_middleware};
use super::state::AppState;
use super::steam;

/// Create the full router with application state
///
/// The gateway middleware wraps every route, including the exempt ones; the
/// exemption decision is made by the authenticator from the request path.
/// CORS sits outside the gateway so preflight requests never need a key.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);

    let router = Router::new()
        // Health and status endpoints
        .route("/health", get(health::health_check))
        .route("/api/status", get(health::status))
        .route("/api/status/health", get(health::health_check))
        // Steam endpoints
        .nest("/api", steam::create_steam_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gateway_middleware,
        ))
        .with_state(state);

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}
