//! Gateway middleware: authentication, then rate limiting

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::api_key::AuthOutcome;
use crate::infrastructure::api_key::RateLimitDecision;

/// Runs in front of every route.
///
/// Rejections short-circuit with 401/429. Admitted requests that carried a
/// credential get its masked form attached as a request extension; the raw
/// value never leaves this function.
pub async fn gateway_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let outcome = state
        .authenticator
        .authenticate(request.uri(), request.headers());

    let key = match outcome {
        AuthOutcome::Admitted(key) => key,
        AuthOutcome::MissingKey => {
            warn!(path = %request.uri().path(), "API key missing from request");
            return Err(ApiError::missing_api_key());
        }
        AuthOutcome::InvalidKey => {
            warn!(path = %request.uri().path(), "Invalid API key provided");
            return Err(ApiError::invalid_api_key());
        }
    };

    if let Some(key) = key {
        if state.rate_limiter.config().enabled {
            if let RateLimitDecision::Rejected(limit) = state.rate_limiter.admit(key.bucket()).await
            {
                warn!(
                    api_key = %key.masked(),
                    limit = %limit,
                    path = %request.uri().path(),
                    "Rate limit exceeded"
                );
                return Err(ApiError::rate_limit_exceeded());
            }
        }

        debug!(api_key = %key.masked(), "Request authenticated");
        request.extensions_mut().insert(key.into_masked());
    }

    Ok(next.run(request).await)
}
