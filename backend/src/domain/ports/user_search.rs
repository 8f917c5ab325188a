//! Driving port for user searches.
//!
//! Inbound adapters call this port with an already validated request and map
//! the outcome onto their own envelope.

use async_trait::async_trait;

use crate::domain::{SearchError, SearchPage, SearchRequest};

/// Errors surfaced by a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserSearchError {
    /// The request cannot be satisfied against this dataset.
    #[error("search rejected: {reason}")]
    Rejected { reason: SearchError },
    /// The dataset could not be loaded.
    #[error("user dataset unavailable: {message}")]
    DatasetUnavailable { message: String },
}

impl UserSearchError {
    pub fn rejected(reason: SearchError) -> Self {
        Self::Rejected { reason }
    }

    pub fn dataset_unavailable(message: impl Into<String>) -> Self {
        Self::DatasetUnavailable {
            message: message.into(),
        }
    }
}

/// Domain use-case port for searching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearch: Send + Sync {
    /// Run one search against a fresh dataset snapshot.
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UserSearchError>;
}
