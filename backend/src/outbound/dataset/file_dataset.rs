//! File-backed user dataset.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error};

use super::parse_users;
use crate::domain::UserRecord;
use crate::domain::ports::{UserDataset, UserDatasetError};

/// Reads and decodes the dataset document on every load.
///
/// Nothing is cached, so edits to the file are visible to the next request
/// and a broken file fails only the requests that read it.
#[derive(Debug, Clone)]
pub struct FileUserDataset {
    path: PathBuf,
}

impl FileUserDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the dataset document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserDataset for FileUserDataset {
    async fn load_users(&self) -> Result<Vec<UserRecord>, UserDatasetError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            error!(path = %self.path.display(), error = %err, "failed to read user dataset");
            UserDatasetError::unreadable(format!("{}: {err}", self.path.display()))
        })?;

        let users = parse_users(&bytes).map_err(|err| {
            error!(path = %self.path.display(), error = %err, "failed to parse user dataset");
            UserDatasetError::malformed(err.to_string())
        })?;
        debug!(path = %self.path.display(), count = users.len(), "user dataset loaded");
        Ok(users)
    }
}
