//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccessTokenVerifier, UserSearch};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub search: Arc<dyn UserSearch>,
    pub tokens: Arc<dyn AccessTokenVerifier>,
}

impl HttpState {
    pub fn new(search: Arc<dyn UserSearch>, tokens: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { search, tokens }
    }
}
