//! Gateway error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Rate limit error
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, message)
    }

    /// Upstream failure
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn missing_api_key() -> Self {
        Self::unauthorized("API key is required")
    }

    pub fn invalid_api_key() -> Self {
        Self::unauthorized("Invalid API key")
    }

    pub fn rate_limit_exceeded() -> Self {
        Self::rate_limited("Rate limit exceeded")
    }

    pub fn message(&self) -> &str {
        &self.response.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::InvalidArgument { message } => Self::bad_request(message),
            DomainError::UpstreamTransport { .. } => {
                Self::bad_gateway("Failed to retrieve data from Steam API")
            }
            DomainError::Decode { .. } => {
                Self::bad_gateway("Steam API returned an unexpected response")
            }
            DomainError::Configuration { .. } => {
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid Steam ID format");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid Steam ID format");
    }

    #[test]
    fn test_gate_rejections() {
        assert_eq!(ApiError::missing_api_key().status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::missing_api_key().message(), "API key is required");
        assert_eq!(ApiError::invalid_api_key().message(), "Invalid API key");
        assert_eq!(ApiError::rate_limit_exceeded().status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ApiError::rate_limit_exceeded().message(), "Rate limit exceeded");
    }

    #[test]
    fn test_domain_error_conversion() {
        let cases = [
            (DomainError::invalid_argument("bad"), StatusCode::BAD_REQUEST),
            (
                DomainError::upstream_transport("http://x", "refused"),
                StatusCode::BAD_GATEWAY,
            ),
            (DomainError::decode("eof", 3), StatusCode::BAD_GATEWAY),
            (DomainError::configuration("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_err, status) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, status);
        }
    }

    #[test]
    fn test_invalid_argument_message_is_kept() {
        let api_err: ApiError = DomainError::invalid_argument("Vanity URL is required").into();
        assert_eq!(api_err.message(), "Vanity URL is required");
    }

    #[test]
    fn test_upstream_details_are_not_exposed() {
        let api_err: ApiError =
            DomainError::upstream_transport("http://x/?key=[REDACTED]", "HTTP 500").into();

        assert!(!api_err.message().contains("http://x"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unauthorized("Invalid API key");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json, serde_json::json!({"error": "Invalid API key"}));
    }
}
