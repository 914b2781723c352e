//! Steam upstream integration
//!
//! URL translation, HTTP transport and the typed client built on both.

mod client;
mod transport;
mod translator;

pub use client::{NewsQuery, OwnedGamesQuery, Relationship, SteamClient};
pub use translator::RequestTranslator;
pub use transport::{HttpTransport, UpstreamTransport};

#[cfg(test)]
pub use transport::MockUpstreamTransport;
