//! Vanity token extraction

use super::DomainError;

/// Path segment that precedes the token in a community profile URL
const PROFILE_MARKER: &str = "/id/";

/// Short human-readable profile identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VanityToken(String);

impl VanityToken {
    /// Extract a vanity token from either a bare token or a profile URL.
    ///
    /// Inputs without a marker segment are returned unchanged.
    pub fn extract(input: &str) -> Result<Self, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "Vanity URL or token is required",
            ));
        }

        if !input.contains('/') && !input.contains('.') {
            return Ok(Self(input.to_string()));
        }

        let Some(start) = input.find(PROFILE_MARKER) else {
            return Ok(Self(input.to_string()));
        };

        let rest = &input[start + PROFILE_MARKER.len()..];
        let token = match rest.find('/') {
            Some(end) => &rest[..end],
            None => rest,
        };

        if token.is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "No vanity token after '{}' in {}",
                PROFILE_MARKER, input
            )));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VanityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of vanity name is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VanityUrlType {
    #[default]
    Individual,
    Group,
}

impl VanityUrlType {
    /// Wire value of the `url_type` parameter
    pub fn code(self) -> u8 {
        match self {
            Self::Individual => 1,
            Self::Group => 2,
        }
    }
}

impl TryFrom<i64> for VanityUrlType {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Individual),
            2 => Ok(Self::Group),
            _ => Err(DomainError::invalid_argument(
                "URL type must be 1 (individual profile) or 2 (group)",
            )),
        }
    }
}
