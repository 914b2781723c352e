//! API key registry validation utilities

use thiserror::Error;

/// Errors that can occur while building the API key registry
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiKeyValidationError {
    #[error("API key header name cannot be empty")]
    EmptyHeaderName,

    #[error("API key header name contains invalid character: '{0}'")]
    InvalidHeaderCharacter(char),

    #[error("API key query parameter name cannot be empty")]
    EmptyQueryParameter,

    #[error("Configured API keys cannot be empty or whitespace")]
    EmptyKey,

    #[error("Exempt path '{0}' must start with '/'")]
    InvalidExemptPath(String),
}

/// Validate the header the credential is read from
///
/// Rules:
/// - Cannot be empty
/// - Only RFC 7230 token characters
pub fn validate_header_name(name: &str) -> Result<(), ApiKeyValidationError> {
    if name.is_empty() {
        return Err(ApiKeyValidationError::EmptyHeaderName);
    }

    if let Some(c) = name.chars().find(|c| !is_token_char(*c)) {
        return Err(ApiKeyValidationError::InvalidHeaderCharacter(c));
    }

    Ok(())
}

/// Validate the query parameter the credential is read from
pub fn validate_query_parameter(name: &str) -> Result<(), ApiKeyValidationError> {
    if name.trim().is_empty() {
        return Err(ApiKeyValidationError::EmptyQueryParameter);
    }

    Ok(())
}

/// Validate a configured credential
pub fn validate_key(key: &str) -> Result<(), ApiKeyValidationError> {
    if key.trim().is_empty() {
        return Err(ApiKeyValidationError::EmptyKey);
    }

    Ok(())
}

/// Validate an authentication-exempt path prefix
pub fn validate_exempt_path(path: &str) -> Result<(), ApiKeyValidationError> {
    if !path.starts_with('/') {
        return Err(ApiKeyValidationError::InvalidExemptPath(path.to_string()));
    }

    Ok(())
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_header_names() {
        assert!(validate_header_name("X-API-Key").is_ok());
        assert!(validate_header_name("x_api_key").is_ok());
    }

    #[test]
    fn test_invalid_header_names() {
        assert_eq!(
            validate_header_name(""),
            Err(ApiKeyValidationError::EmptyHeaderName)
        );
        assert_eq!(
            validate_header_name("X API Key"),
            Err(ApiKeyValidationError::InvalidHeaderCharacter(' '))
        );
        assert_eq!(
            validate_header_name("X-Key:"),
            Err(ApiKeyValidationError::InvalidHeaderCharacter(':'))
        );
    }

    #[test]
    fn test_query_parameter() {
        assert!(validate_query_parameter("api_key").is_ok());
        assert_eq!(
            validate_query_parameter("  "),
            Err(ApiKeyValidationError::EmptyQueryParameter)
        );
    }

    #[test]
    fn test_keys() {
        assert!(validate_key("abc").is_ok());
        assert_eq!(validate_key(""), Err(ApiKeyValidationError::EmptyKey));
        assert_eq!(validate_key(" \t"), Err(ApiKeyValidationError::EmptyKey));
    }

    #[test]
    fn test_exempt_paths() {
        assert!(validate_exempt_path("/health").is_ok());
        assert_eq!(
            validate_exempt_path("health"),
            Err(ApiKeyValidationError::InvalidExemptPath("health".to_string()))
        );
    }
}
