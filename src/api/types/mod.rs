//! Shared request and response types for the HTTP surface

pub mod error;
pub mod query;

pub use error::{ApiError, ApiErrorResponse};
pub use query::Query;
