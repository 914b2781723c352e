//! Upstream URL assembly

use crate::domain::upstream::{FlatRequest, NormalizedRequest, QueryParams, UpstreamRequest, UpstreamUrl};

/// Turns normalized requests into concrete upstream URLs
///
/// Versioned calls get the shared credential and `format=json` ahead of the
/// caller's parameters. Flat store calls carry only the caller's parameters.
#[derive(Clone)]
pub struct RequestTranslator {
    base_url: String,
    store_base_url: String,
    api_key: String,
}

impl RequestTranslator {
    pub fn new(
        base_url: impl Into<String>,
        store_base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            store_base_url: trim_base(store_base_url.into()),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store_base_url(&self) -> &str {
        &self.store_base_url
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn build(&self, request: &UpstreamRequest) -> UpstreamUrl {
        let url = match request {
            UpstreamRequest::Versioned(req) => self.versioned(req),
            UpstreamRequest::Flat(req) => self.flat(req),
        };

        UpstreamUrl::new(url)
    }

    fn versioned(&self, request: &NormalizedRequest) -> String {
        let mut query = vec![
            format!("key={}", urlencoding::encode(&self.api_key)),
            "format=json".to_string(),
        ];
        query.extend(encode_pairs(&request.params));

        format!(
            "{}/{}/{}/{}/?{}",
            self.base_url,
            request.interface,
            request.method,
            request.version,
            query.join("&")
        )
    }

    fn flat(&self, request: &FlatRequest) -> String {
        let url = format!("{}/{}", self.store_base_url, request.endpoint);

        if request.params.is_empty() {
            return url;
        }

        format!("{}?{}", url, encode_pairs(&request.params).join("&"))
    }
}

impl std::fmt::Debug for RequestTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTranslator")
            .field("base_url", &self.base_url)
            .field("store_base_url", &self.store_base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn encode_pairs(params: &QueryParams) -> Vec<String> {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> RequestTranslator {
        RequestTranslator::new("http://x", "http://store/api", "KEY")
    }

    #[test]
    fn test_versioned_url() {
        let request: UpstreamRequest =
            NormalizedRequest::new("ISteamUser", "GetFriendList", "v0001")
                .param("relationship", "all")
                .into();

        let url = translator().build(&request);

        assert_eq!(
            url.as_str(),
            "http://x/ISteamUser/GetFriendList/v0001/?key=KEY&format=json&relationship=all"
        );
    }

    #[test]
    fn test_versioned_url_without_params() {
        let request: UpstreamRequest =
            NormalizedRequest::new("ISteamApps", "GetAppList", "v0002").into();

        let url = translator().build(&request);

        assert_eq!(
            url.as_str(),
            "http://x/ISteamApps/GetAppList/v0002/?key=KEY&format=json"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let translator = RequestTranslator::new("http://x///", "http://store/api/", "KEY");
        let versioned: UpstreamRequest = NormalizedRequest::new("I", "M", "v1").into();
        let flat: UpstreamRequest = FlatRequest::new("appdetails").into();

        assert!(translator.build(&versioned).as_str().starts_with("http://x/I/M/v1/?"));
        assert_eq!(translator.build(&flat).as_str(), "http://store/api/appdetails");
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let translator = RequestTranslator::new("http://x", "http://store", "K&Y=1");
        let request: UpstreamRequest = NormalizedRequest::new("ISteamUser", "ResolveVanityURL", "v0001")
            .param("vanityurl", "a b/c")
            .param("odd key", "ü")
            .into();

        let url = translator.build(&request);

        assert_eq!(
            url.as_str(),
            "http://x/ISteamUser/ResolveVanityURL/v0001/?key=K%26Y%3D1&format=json&vanityurl=a%20b%2Fc&odd%20key=%C3%BC"
        );
    }

    #[test]
    fn test_flat_url_with_params() {
        let request: UpstreamRequest = FlatRequest::new("appdetails")
            .param("appids", "440")
            .param("cc", "us")
            .into();

        let url = translator().build(&request);

        assert_eq!(url.as_str(), "http://store/api/appdetails?appids=440&cc=us");
        assert!(!url.as_str().contains("key="));
        assert!(!url.as_str().contains("format=json"));
    }

    #[test]
    fn test_flat_url_without_params_has_no_query() {
        let request: UpstreamRequest = FlatRequest::new("featured").into();

        assert_eq!(translator().build(&request).as_str(), "http://store/api/featured");
    }

    #[test]
    fn test_debug_hides_credential() {
        let rendered = format!("{:?}", translator());
        assert!(!rendered.contains("KEY"));
    }
}
