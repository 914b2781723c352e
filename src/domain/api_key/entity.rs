//! API key registry and authentication outcome types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_exempt_path, validate_header_name, validate_key, validate_query_parameter,
    ApiKeyValidationError,
};

/// Marker returned when a credential is too short to partially reveal
pub const REDACTED_MARKER: &str = "***";

pub const DEFAULT_HEADER_NAME: &str = "X-API-Key";
pub const DEFAULT_QUERY_PARAMETER: &str = "api_key";

/// Path prefixes that bypass authentication unless configured otherwise
pub const DEFAULT_EXEMPT_PATHS: [&str; 3] = ["/api/status", "/health", "/swagger"];

/// Sliding window ceilings applied per credential
///
/// The minute and hour ceilings are independent; neither is derived from the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether rate limiting is enforced at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum admitted requests in any trailing 60 seconds
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,
    /// Maximum admitted requests in any trailing 3600 seconds
    #[serde(default = "default_requests_per_hour")]
    pub requests_per_hour: u32,
}

impl RateLimitConfig {
    /// Create an enabled config with the given ceilings
    pub fn new(requests_per_minute: u32, requests_per_hour: u32) -> Self {
        Self {
            enabled: true,
            requests_per_minute,
            requests_per_hour,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new(default_requests_per_minute(), default_requests_per_hour())
    }
}

fn default_true() -> bool {
    true
}

fn default_requests_per_minute() -> u32 {
    100
}

fn default_requests_per_hour() -> u32 {
    1000
}

/// Immutable set of caller credentials plus the rules for reading them.
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ApiKeyRegistry {
    valid_keys: HashSet<String>,
    require_api_key: bool,
    header_name: String,
    query_parameter_name: String,
    exempt_paths: Vec<String>,
    rate_limit: RateLimitConfig,
}

impl ApiKeyRegistry {
    /// Create a registry with default header, query parameter, exempt paths
    /// and rate limits
    pub fn new(
        valid_keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ApiKeyValidationError> {
        let valid_keys = valid_keys
            .into_iter()
            .map(Into::into)
            .collect::<HashSet<String>>();

        for key in &valid_keys {
            validate_key(key)?;
        }

        Ok(Self {
            valid_keys,
            require_api_key: true,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            query_parameter_name: DEFAULT_QUERY_PARAMETER.to_string(),
            exempt_paths: DEFAULT_EXEMPT_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            rate_limit: RateLimitConfig::default(),
        })
    }

    /// Set whether a credential is required
    pub fn with_require_api_key(mut self, require: bool) -> Self {
        self.require_api_key = require;
        self
    }

    /// Set the header the credential is read from
    pub fn with_header_name(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, ApiKeyValidationError> {
        let name = name.into();
        validate_header_name(&name)?;
        self.header_name = name;
        Ok(self)
    }

    /// Set the query parameter used as fallback
    pub fn with_query_parameter_name(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, ApiKeyValidationError> {
        let name = name.into();
        validate_query_parameter(&name)?;
        self.query_parameter_name = name;
        Ok(self)
    }

    /// Replace the authentication-exempt path prefixes
    pub fn with_exempt_paths(
        mut self,
        paths: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ApiKeyValidationError> {
        let mut exempt = Vec::new();

        for path in paths {
            let path = path.into();
            validate_exempt_path(&path)?;
            exempt.push(path.to_lowercase());
        }

        self.exempt_paths = exempt;
        Ok(self)
    }

    /// Set the rate limit configuration
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Exact-match membership test
    pub fn is_valid(&self, key: &str) -> bool {
        self.valid_keys.contains(key)
    }

    /// Case-insensitive prefix match against the exempt paths
    pub fn is_exempt(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        self.exempt_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn require_api_key(&self) -> bool {
        self.require_api_key
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn query_parameter_name(&self) -> &str {
        &self.query_parameter_name
    }

    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.rate_limit
    }

    pub fn key_count(&self) -> usize {
        self.valid_keys.len()
    }
}

/// Audit-safe form of a credential
///
/// Keeps the first and last four characters of keys longer than eight
/// characters; shorter keys collapse to [`REDACTED_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MaskedApiKey(String);

impl MaskedApiKey {
    pub fn from_key(key: &str) -> Self {
        let chars: Vec<char> = key.chars().collect();

        if chars.len() <= 8 {
            return Self(REDACTED_MARKER.to_string());
        }

        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();

        Self(format!("{}...{}", head, tail))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MaskedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A credential that passed validation.
///
/// The raw value is only reachable inside the crate, where it keys the rate
/// limiter; everything else sees the masked form.
#[derive(Clone)]
pub struct AuthenticatedKey {
    key: String,
    masked: MaskedApiKey,
}

impl AuthenticatedKey {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let masked = MaskedApiKey::from_key(&key);
        Self { key, masked }
    }

    /// Rate limit bucket identifier
    pub(crate) fn bucket(&self) -> &str {
        &self.key
    }

    pub fn masked(&self) -> &MaskedApiKey {
        &self.masked
    }

    pub fn into_masked(self) -> MaskedApiKey {
        self.masked
    }
}

impl std::fmt::Debug for AuthenticatedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedKey")
            .field("masked", &self.masked)
            .finish()
    }
}

/// Result of authenticating a request
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Request may proceed. `None` when the path is exempt or no credential is
    /// required.
    Admitted(Option<AuthenticatedKey>),
    /// No credential in the header or the query string
    MissingKey,
    /// A credential was presented but is not in the registry
    InvalidKey,
}

impl AuthOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_key_is_redacted() {
        assert_eq!(MaskedApiKey::from_key("abc123de").as_str(), REDACTED_MARKER);
        assert_eq!(MaskedApiKey::from_key("abc").as_str(), REDACTED_MARKER);
        assert_eq!(MaskedApiKey::from_key("").as_str(), REDACTED_MARKER);
    }

    #[test]
    fn test_mask_long_key_keeps_edges() {
        assert_eq!(MaskedApiKey::from_key("abc123def").as_str(), "abc1...3def");
        assert_eq!(
            MaskedApiKey::from_key("sk-live-0123456789abcdef").as_str(),
            "sk-l...cdef"
        );
    }

    #[test]
    fn test_mask_preserves_edges_for_every_length() {
        let source = "0123456789abcdefghijklmnopqrstuvwxyz";

        for len in 0..=source.len() {
            let key = &source[..len];
            let masked = MaskedApiKey::from_key(key);

            if len <= 8 {
                assert_eq!(masked.as_str(), REDACTED_MARKER);
            } else {
                assert!(masked.as_str().starts_with(&key[..4]));
                assert!(masked.as_str().ends_with(&key[len - 4..]));
                assert_eq!(masked.as_str().len(), 11);
            }
        }
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        let masked = MaskedApiKey::from_key("ééééééééé");
        assert_eq!(masked.as_str(), "éééé...éééé");
    }

    #[test]
    fn test_authenticated_key_debug_hides_raw_value() {
        let key = AuthenticatedKey::new("super-secret-credential");
        let debug = format!("{:?}", key);

        assert!(!debug.contains("super-secret-credential"));
        assert!(debug.contains("supe...tial"));
        assert_eq!(key.bucket(), "super-secret-credential");
    }

    #[test]
    fn test_registry_membership_is_exact() {
        let registry = ApiKeyRegistry::new(["key-one", "key-two"]).unwrap();

        assert!(registry.is_valid("key-one"));
        assert!(!registry.is_valid("KEY-ONE"));
        assert!(!registry.is_valid("key-one "));
        assert!(!registry.is_valid("key"));
        assert_eq!(registry.key_count(), 2);
    }

    #[test]
    fn test_registry_defaults() {
        let registry = ApiKeyRegistry::new(Vec::<String>::new()).unwrap();

        assert!(registry.require_api_key());
        assert_eq!(registry.header_name(), "X-API-Key");
        assert_eq!(registry.query_parameter_name(), "api_key");
        assert_eq!(registry.rate_limit(), &RateLimitConfig::new(100, 1000));
    }

    #[test]
    fn test_registry_rejects_blank_keys() {
        let result = ApiKeyRegistry::new(["good", "  "]);
        assert_eq!(result.unwrap_err(), ApiKeyValidationError::EmptyKey);
    }

    #[test]
    fn test_exempt_paths_are_case_insensitive_prefixes() {
        let registry = ApiKeyRegistry::new(["k"]).unwrap();

        assert!(registry.is_exempt("/api/status"));
        assert!(registry.is_exempt("/API/Status/extra"));
        assert!(registry.is_exempt("/health"));
        assert!(registry.is_exempt("/swagger/index.html"));
        assert!(!registry.is_exempt("/api/steamuser/summaries"));
        assert!(!registry.is_exempt("/v1/health"));
    }

    #[test]
    fn test_custom_exempt_paths_replace_defaults() {
        let registry = ApiKeyRegistry::new(["k"])
            .unwrap()
            .with_exempt_paths(["/Ping"])
            .unwrap();

        assert!(registry.is_exempt("/ping"));
        assert!(!registry.is_exempt("/health"));
    }

    #[test]
    fn test_rate_limit_config_deserializes_with_defaults() {
        let config: RateLimitConfig =
            serde_json::from_str(r#"{"requests_per_minute": 5}"#).unwrap();

        assert!(config.enabled);
        assert_eq!(config.requests_per_minute, 5);
        assert_eq!(config.requests_per_hour, 1000);
    }
}
