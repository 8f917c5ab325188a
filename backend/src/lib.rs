//! User search service library.
//!
//! - [`domain`]: records, query validation and the search pipeline.
//! - [`inbound`]: the HTTP endpoint.
//! - [`outbound`]: dataset and access token adapters.
//! - [`client`]: typed client for the endpoint.

pub mod client;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
pub use settings::SearchServerSettings;
