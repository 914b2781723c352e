//! Caller identity extractor

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::api_key::MaskedApiKey;

/// Masked credential of the caller, as attached by the gateway middleware
///
/// `None` when the route is exempt or credentials are not required.
#[derive(Debug, Clone)]
pub struct CallerKey(pub Option<MaskedApiKey>);

impl CallerKey {
    /// Value for log fields
    pub fn label(&self) -> &str {
        self.0.as_ref().map(MaskedApiKey::as_str).unwrap_or("anonymous")
    }
}

impl<S> FromRequestParts<S> for CallerKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CallerKey(parts.extensions.get::<MaskedApiKey>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(masked: Option<MaskedApiKey>) -> CallerKey {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        if let Some(masked) = masked {
            parts.extensions.insert(masked);
        }

        CallerKey::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_extracts_masked_key() {
        let caller = extract(Some(MaskedApiKey::from_key("valid-key-123456"))).await;

        assert_eq!(caller.label(), "vali...3456");
    }

    #[tokio::test]
    async fn test_anonymous_without_extension() {
        let caller = extract(None).await;

        assert!(caller.0.is_none());
        assert_eq!(caller.label(), "anonymous");
    }
}
