//! Domain layer - Core business logic and entities

pub mod api_key;
pub mod error;
pub mod steam;
pub mod upstream;
pub mod vanity;

pub use api_key::{
    ApiKeyRegistry, ApiKeyValidationError, AuthOutcome, AuthenticatedKey, MaskedApiKey,
    RateLimitConfig,
};
pub use error::DomainError;
pub use upstream::{FlatRequest, NormalizedRequest, UpstreamRequest, UpstreamUrl};
pub use vanity::{VanityToken, VanityUrlType};
