//! Cross-origin layer built from configuration

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build the CORS layer, or `None` when CORS is disabled.
///
/// Unparseable origins, methods and headers are skipped with a warning.
/// Credentials are never combined with a wildcard origin.
pub fn build_cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if !config.enabled {
        return None;
    }

    let any_origin = config.allowed_origins.is_empty()
        || config.allowed_origins.iter().any(|o| o == "*");

    let mut cors = CorsLayer::new()
        .allow_methods(parse_all::<Method>(&config.allowed_methods, "method"))
        .allow_headers(parse_all::<HeaderName>(&config.allowed_headers, "header"))
        .expose_headers(parse_all::<HeaderName>(&config.exposed_headers, "header"))
        .max_age(Duration::from_secs(config.preflight_max_age_seconds));

    if any_origin {
        cors = cors.allow_origin(Any);
        if config.allow_credentials {
            warn!("CORS credentials cannot be allowed for any origin; ignoring allow_credentials");
        }
    } else {
        cors = cors
            .allow_origin(parse_all::<HeaderValue>(&config.allowed_origins, "origin"))
            .allow_credentials(config.allow_credentials);
    }

    Some(cors)
}

fn parse_all<T: std::str::FromStr>(values: &[String], kind: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(kind, value = %value, "Ignoring unparseable CORS entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> CorsConfig {
        CorsConfig {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_builds_nothing() {
        assert!(build_cors_layer(&CorsConfig::default()).is_none());
    }

    #[test]
    fn test_any_origin_ignores_credentials() {
        let config = CorsConfig {
            allow_credentials: true,
            ..enabled()
        };

        assert!(build_cors_layer(&config).is_some());
    }

    #[test]
    fn test_explicit_origins_with_credentials() {
        let config = CorsConfig {
            allowed_origins: vec!["https://example.com".to_string()],
            allow_credentials: true,
            exposed_headers: vec!["X-Request-Id".to_string()],
            ..enabled()
        };

        assert!(build_cors_layer(&config).is_some());
    }

    #[test]
    fn test_parse_all_skips_invalid_entries() {
        let methods = parse_all::<Method>(
            &["GET".to_string(), "NOT A METHOD".to_string()],
            "method",
        );

        assert_eq!(methods, vec![Method::GET]);
    }
}
