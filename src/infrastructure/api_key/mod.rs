//! API Key infrastructure implementations
//!
//! This module provides request authentication and per-key rate limiting.

mod authenticator;
mod rate_limiter;

pub use authenticator::KeyAuthenticator;
pub use rate_limiter::{LimitType, RateLimitDecision, SlidingWindowRateLimiter};
