//! API middleware components

pub mod auth;
pub mod cors;
pub mod gateway;

pub use auth::CallerKey;
pub use cors::build_cors_layer;
pub use gateway::gateway_middleware;
