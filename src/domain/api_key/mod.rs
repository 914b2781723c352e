//! API Key domain
//!
//! This module provides the credential registry, masking, and the outcome
//! type produced by request authentication.

mod entity;
mod validation;

pub use entity::{
    ApiKeyRegistry, AuthOutcome, AuthenticatedKey, MaskedApiKey, RateLimitConfig,
    DEFAULT_EXEMPT_PATHS, DEFAULT_HEADER_NAME, DEFAULT_QUERY_PARAMETER, REDACTED_MARKER,
};
pub use validation::ApiKeyValidationError;
