//! Upstream request domain
//!
//! Normalized descriptions of calls against the Steam surfaces, independent
//! of how they are turned into URLs.

mod request;

pub use request::{FlatRequest, NormalizedRequest, QueryParams, UpstreamRequest, UpstreamUrl};
