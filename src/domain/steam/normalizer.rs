//! Response normalizer
//!
//! Upstream field names are matched case-insensitively: object keys are
//! lowercased before typed decoding, so models name their fields after the
//! lowercase snake_case wire form. Null members are dropped and members of an
//! unexpected type decode as their type's empty value, so a syntactically valid
//! body always decodes into a model that defaults its fields.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use super::lenient::Lenient;
use crate::domain::DomainError;

/// Errors produced while decoding an upstream body
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {source}")]
    Syntax {
        #[source]
        source: serde_json::Error,
        body_len: usize,
    },

    /// The target type has no fallback for a member, such as a required
    /// field without a default. Models that default every field never see it.
    #[error("Unexpected JSON shape: {source}")]
    Shape {
        #[source]
        source: serde_json::Error,
        body_len: usize,
    },
}

impl DecodeError {
    /// Size of the raw body that failed to decode
    pub fn body_len(&self) -> usize {
        match self {
            Self::Syntax { body_len, .. } | Self::Shape { body_len, .. } => *body_len,
        }
    }
}

impl From<DecodeError> for DomainError {
    fn from(err: DecodeError) -> Self {
        let body_len = err.body_len();
        DomainError::decode(err.to_string(), body_len)
    }
}

/// Decode a raw upstream body into `T`
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    let body_len = body.len();

    let value: Value = serde_json::from_str(body)
        .map_err(|source| DecodeError::Syntax { source, body_len })?;

    T::deserialize(Lenient(normalize(value)))
        .map_err(|source| DecodeError::Shape { source, body_len })
}

/// Parse a body that is passed through untyped, keeping its original keys
pub fn parse_raw(body: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(body).map_err(|source| DecodeError::Syntax {
        source,
        body_len: body.len(),
    })
}

/// Lowercase every object key and drop null members, recursively
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let normalized = map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), normalize(v)))
                .collect::<Map<String, Value>>();
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        steamid: String,
        gamename: String,
        count: u32,
        enabled: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_decode_matches_names_case_insensitively() {
        let sample: Sample =
            decode(r#"{"SteamID": "765", "GameName": "TF2", "COUNT": 3}"#).unwrap();

        assert_eq!(sample.steamid, "765");
        assert_eq!(sample.gamename, "TF2");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn test_decode_defaults_missing_and_null_fields() {
        let sample: Sample = decode(r#"{"steamid": null, "tags": null, "extra": 1}"#).unwrap();

        assert_eq!(sample.steamid, "");
        assert_eq!(sample.gamename, "");
        assert_eq!(sample.count, 0);
        assert!(!sample.enabled);
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode::<Sample>("{not json").unwrap_err();

        assert!(matches!(err, DecodeError::Syntax { .. }));
        assert_eq!(err.body_len(), 9);
    }

    #[test]
    fn test_decode_valid_json_with_wrong_member_types() {
        let sample: Sample = decode(
            r#"{"steamid": 765, "gamename": ["TF2"], "count": "x", "enabled": {}, "tags": "solo"}"#,
        )
        .unwrap();

        assert_eq!(sample.steamid, "");
        assert_eq!(sample.gamename, "");
        assert_eq!(sample.count, 0);
        assert!(!sample.enabled);
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_decode_reports_shape_errors_for_required_fields() {
        #[derive(Debug, Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            id: u32,
        }

        let err = decode::<Strict>("{}").unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }));
    }

    #[test]
    fn test_decode_error_converts_to_domain_error() {
        let err: DomainError = decode::<Sample>("<html>").unwrap_err().into();

        match err {
            DomainError::Decode { body_len, .. } => assert_eq!(body_len, 6),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_parse_raw_keeps_original_keys() {
        let value = parse_raw(r#"{"Response": {"Groups": [], "gone": null}}"#).unwrap();

        assert_eq!(value, json!({"Response": {"Groups": [], "gone": null}}));
        assert!(matches!(parse_raw("nope"), Err(DecodeError::Syntax { .. })));
    }

    #[test]
    fn test_normalize_recurses_into_arrays() {
        let value = normalize(json!({
            "Outer": [{"Inner": 1, "Gone": null}],
            "Keep": [null]
        }));

        assert_eq!(value, json!({"outer": [{"inner": 1}], "keep": [null]}));
    }
}
