//! Normalized upstream request types

/// Query parameters in the order the caller supplied them
pub type QueryParams = Vec<(String, String)>;

/// A call against the versioned interface surface:
/// `{interface}/{method}/{version}` plus caller parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub interface: String,
    pub method: String,
    pub version: String,
    pub params: QueryParams,
}

impl NormalizedRequest {
    pub fn new(
        interface: impl Into<String>,
        method: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            interface: interface.into(),
            method: method.into(),
            version: version.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }
}

/// A call against the flat, unauthenticated store surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRequest {
    pub endpoint: String,
    pub params: QueryParams,
}

impl FlatRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// Every URL shape the translator knows how to assemble
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    Versioned(NormalizedRequest),
    Flat(FlatRequest),
}

impl UpstreamRequest {
    /// Short label for logs, never containing parameters
    pub fn label(&self) -> String {
        match self {
            Self::Versioned(req) => format!("{}/{}/{}", req.interface, req.method, req.version),
            Self::Flat(req) => req.endpoint.clone(),
        }
    }
}

impl From<NormalizedRequest> for UpstreamRequest {
    fn from(request: NormalizedRequest) -> Self {
        Self::Versioned(request)
    }
}

impl From<FlatRequest> for UpstreamRequest {
    fn from(request: FlatRequest) -> Self {
        Self::Flat(request)
    }
}

/// Fully assembled upstream target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamUrl(String);

impl UpstreamUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL with the value of any `key` query parameter replaced, for logs
    /// and error messages
    pub fn redacted(&self) -> String {
        let Some((base, query)) = self.0.split_once('?') else {
            return self.0.clone();
        };

        let query = query
            .split('&')
            .map(|pair| {
                if pair.starts_with("key=") {
                    "key=[REDACTED]"
                } else {
                    pair
                }
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base, query)
    }
}

impl std::fmt::Display for UpstreamUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}
