use thiserror::Error;

/// Core domain errors
///
/// Every variant is scoped to a single request; none of them is fatal to the
/// process.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Upstream request failed: {message}")]
    UpstreamTransport { url: String, message: String },

    #[error("Failed to decode upstream response: {message}")]
    Decode { message: String, body_len: usize },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    /// `url` must already have the shared credential redacted.
    pub fn upstream_transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamTransport {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>, body_len: usize) -> Self {
        Self::Decode {
            message: message.into(),
            body_len,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = DomainError::invalid_argument("Vanity input is empty");
        assert_eq!(error.to_string(), "Invalid argument: Vanity input is empty");
    }

    #[test]
    fn test_upstream_transport_error() {
        let error = DomainError::upstream_transport("http://x/a", "connection refused");
        assert_eq!(error.to_string(), "Upstream request failed: connection refused");

        match error {
            DomainError::UpstreamTransport { url, .. } => assert_eq!(url, "http://x/a"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_keeps_body_len() {
        let error = DomainError::decode("expected value at line 1", 42);

        match error {
            DomainError::Decode { body_len, .. } => assert_eq!(body_len, 42),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
