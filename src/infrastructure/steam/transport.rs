//! HTTP transport to the upstream surfaces

use std::time::Duration;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::{DomainError, UpstreamUrl};

/// Fetches a raw upstream body
///
/// Non-success statuses, connection failures and timeouts are all transport
/// errors. Error messages only ever carry the redacted URL.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamTransport: Send + Sync + std::fmt::Debug {
    async fn get(&self, url: &UpstreamUrl) -> Result<String, DomainError>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn get(&self, url: &UpstreamUrl) -> Result<String, DomainError> {
        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("Request timed out after {}s", self.timeout.as_secs())
            } else {
                // reqwest embeds the full URL in its message; drop it
                format!("Request failed: {}", e.without_url())
            };
            DomainError::upstream_transport(url.redacted(), message)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::upstream_transport(
                url.redacted(),
                format!("HTTP {}", status),
            ));
        }

        response.text().await.map_err(|e| {
            DomainError::upstream_transport(
                url.redacted(),
                format!("Failed to read response body: {}", e.without_url()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url(server: &MockServer, suffix: &str) -> UpstreamUrl {
        UpstreamUrl::new(format!("{}{}", server.uri(), suffix))
    }

    fn transport() -> HttpTransport {
        HttpTransport::with_timeout(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ISteamUser/GetPlayerSummaries/v0002/"))
            .and(query_param("key", "SECRET"))
            .and(query_param("steamids", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = transport()
            .get(&url(
                &server,
                "/ISteamUser/GetPlayerSummaries/v0002/?key=SECRET&format=json&steamids=1",
            ))
            .await
            .unwrap();

        assert_eq!(body, r#"{"response":{}}"#);
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&server)
            .await;

        let err = transport()
            .get(&url(&server, "/I/M/v1/?key=SECRET&format=json"))
            .await
            .unwrap_err();

        match err {
            DomainError::UpstreamTransport { url, message } => {
                assert!(message.contains("403"));
                assert!(url.contains("key=[REDACTED]"));
                assert!(!url.contains("SECRET"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_timeout(Duration::from_millis(100)).unwrap();
        let err = transport
            .get(&url(&server, "/I/M/v1/?key=SECRET"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UpstreamTransport { .. }));
        assert!(!err.to_string().contains("SECRET"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let err = transport()
            .get(&UpstreamUrl::new("http://127.0.0.1:1/I/M/v1/?key=SECRET".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UpstreamTransport { .. }));
        assert!(!err.to_string().contains("SECRET"));
    }
}
