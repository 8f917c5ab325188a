//! Search use-case backed by a [`UserDataset`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::ports::{UserDataset, UserSearch, UserSearchError};
use super::{SearchPage, SearchRequest, run_pipeline};

/// Runs the search pipeline over a fresh dataset snapshot per call.
#[derive(Clone)]
pub struct UserSearchService {
    dataset: Arc<dyn UserDataset>,
}

impl UserSearchService {
    pub fn new(dataset: Arc<dyn UserDataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl UserSearch for UserSearchService {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UserSearchError> {
        let users = self.dataset.load_users().await.map_err(|err| {
            warn!(error = %err, "user dataset could not be loaded");
            UserSearchError::dataset_unavailable(err.to_string())
        })?;

        let total = users.len();
        let page = run_pipeline(users, request).map_err(UserSearchError::rejected)?;
        debug!(
            total,
            returned = page.users.len(),
            next_page = page.next_page,
            order_field = %request.order_field(),
            order_by = request.order_by().as_wire(),
            "user search completed"
        );
        Ok(page)
    }
}
