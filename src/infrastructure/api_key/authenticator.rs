//! Request authentication against the configured key registry

use std::sync::Arc;

use axum::extract::Query;
use axum::http::{HeaderMap, Uri};
use tracing::debug;

use crate::domain::api_key::{ApiKeyRegistry, AuthOutcome, AuthenticatedKey};

/// Resolves the credential carried by a request and checks it against the
/// registry
#[derive(Debug, Clone)]
pub struct KeyAuthenticator {
    registry: Arc<ApiKeyRegistry>,
}

impl KeyAuthenticator {
    pub fn new(registry: Arc<ApiKeyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ApiKeyRegistry {
        &self.registry
    }

    /// Exempt paths and disabled enforcement admit without a credential.
    /// Otherwise the header is consulted first, then the query string; the
    /// first non-empty value is matched exactly against the registry.
    pub fn authenticate(&self, uri: &Uri, headers: &HeaderMap) -> AuthOutcome {
        if self.registry.is_exempt(uri.path()) {
            debug!(path = %uri.path(), "Path exempt from API key validation");
            return AuthOutcome::Admitted(None);
        }

        if !self.registry.require_api_key() {
            return AuthOutcome::Admitted(None);
        }

        let Some(key) = self.extract_key(uri, headers) else {
            return AuthOutcome::MissingKey;
        };

        if !self.registry.is_valid(&key) {
            return AuthOutcome::InvalidKey;
        }

        AuthOutcome::Admitted(Some(AuthenticatedKey::new(key)))
    }

    fn extract_key(&self, uri: &Uri, headers: &HeaderMap) -> Option<String> {
        extract_from_headers(headers, self.registry.header_name())
            .or_else(|| extract_from_query(uri, self.registry.query_parameter_name()))
    }
}

fn extract_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn extract_from_query(uri: &Uri, name: &str) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

    pairs
        .into_iter()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_key::MaskedApiKey;

    fn authenticator(registry: ApiKeyRegistry) -> KeyAuthenticator {
        KeyAuthenticator::new(Arc::new(registry))
    }

    fn default_authenticator() -> KeyAuthenticator {
        authenticator(ApiKeyRegistry::new(["valid-key-123456", "abc123de"]).unwrap())
    }

    fn headers(name: &str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
            value.parse().unwrap(),
        );
        headers
    }

    fn uri(value: &str) -> Uri {
        value.parse().unwrap()
    }

    fn admitted_mask(outcome: AuthOutcome) -> Option<MaskedApiKey> {
        match outcome {
            AuthOutcome::Admitted(key) => key.map(AuthenticatedKey::into_masked),
            other => panic!("expected admission, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_header_key() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(
            &uri("/api/steamuser/player/1"),
            &headers("X-API-Key", "valid-key-123456"),
        );

        assert_eq!(admitted_mask(outcome).unwrap().as_str(), "vali...3456");
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(&uri("/api/x"), &headers("x-api-key", "valid-key-123456"));

        assert!(outcome.is_admitted());
    }

    #[test]
    fn test_query_fallback() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(
            &uri("/api/steamuser/player/1?foo=bar&api_key=valid-key-123456"),
            &HeaderMap::new(),
        );

        assert!(outcome.is_admitted());
    }

    #[test]
    fn test_header_takes_precedence_over_query() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(
            &uri("/api/x?api_key=valid-key-123456"),
            &headers("X-API-Key", "wrong"),
        );

        assert!(matches!(outcome, AuthOutcome::InvalidKey));
    }

    #[test]
    fn test_empty_header_falls_back_to_query() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(
            &uri("/api/x?api_key=valid-key-123456"),
            &headers("X-API-Key", ""),
        );

        assert!(outcome.is_admitted());
    }

    #[test]
    fn test_missing_key() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(&uri("/api/x?api_key="), &HeaderMap::new());

        assert!(matches!(outcome, AuthOutcome::MissingKey));
    }

    #[test]
    fn test_match_is_exact() {
        let auth = default_authenticator();

        let padded = auth.authenticate(&uri("/api/x"), &headers("X-API-Key", "valid-key-123456 "));
        let cased = auth.authenticate(&uri("/api/x"), &headers("X-API-Key", "VALID-KEY-123456"));

        assert!(matches!(padded, AuthOutcome::InvalidKey));
        assert!(matches!(cased, AuthOutcome::InvalidKey));
    }

    #[test]
    fn test_exempt_paths_skip_extraction() {
        let auth = default_authenticator();

        for path in ["/health", "/api/status", "/API/Status/extra", "/swagger/index.html"] {
            let outcome = auth.authenticate(&uri(path), &headers("X-API-Key", "wrong"));
            assert!(admitted_mask(outcome).is_none(), "{path} should be exempt");
        }
    }

    #[test]
    fn test_not_required_admits_everything() {
        let registry = ApiKeyRegistry::new(["valid-key-123456"])
            .unwrap()
            .with_require_api_key(false);
        let auth = authenticator(registry);

        let without = auth.authenticate(&uri("/api/x"), &HeaderMap::new());
        let invalid = auth.authenticate(&uri("/api/x"), &headers("X-API-Key", "wrong"));

        assert!(admitted_mask(without).is_none());
        assert!(admitted_mask(invalid).is_none());
    }

    #[test]
    fn test_custom_names() {
        let registry = ApiKeyRegistry::new(["valid-key-123456"])
            .unwrap()
            .with_header_name("X-Gateway-Token")
            .unwrap()
            .with_query_parameter_name("token")
            .unwrap();
        let auth = authenticator(registry);

        let by_header = auth.authenticate(
            &uri("/api/x"),
            &headers("X-Gateway-Token", "valid-key-123456"),
        );
        let by_query = auth.authenticate(&uri("/api/x?token=valid-key-123456"), &HeaderMap::new());
        let default_header =
            auth.authenticate(&uri("/api/x"), &headers("X-API-Key", "valid-key-123456"));

        assert!(by_header.is_admitted());
        assert!(by_query.is_admitted());
        assert!(matches!(default_header, AuthOutcome::MissingKey));
    }

    #[test]
    fn test_short_key_is_fully_masked() {
        let auth = default_authenticator();

        let outcome = auth.authenticate(&uri("/api/x"), &headers("X-API-Key", "abc123de"));

        assert_eq!(admitted_mask(outcome).unwrap().as_str(), "***");
    }
}
