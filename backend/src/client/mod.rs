//! Typed client for the search endpoint.
//!
//! Purpose: let Rust callers page through a remote search server without
//! touching HTTP details. Every transport or protocol outcome is folded into
//! [`SearchClientError`], and known server rejections come back as the same
//! [`SearchError`](crate::domain::SearchError) tags the server raised.

mod error;
mod http_client;

pub use error::SearchClientError;
pub use http_client::{SearchClient, SearchClientConfig};
