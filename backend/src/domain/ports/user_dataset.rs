//! Driven port yielding the user dataset for one search.
//!
//! Each call returns an owned snapshot. Adapters may re-read the source on
//! every call or hand out copies of a cached, read-only parse.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::UserRecord;

/// Errors raised while loading the dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserDatasetError {
    /// The source document could not be read.
    #[error("user dataset unreadable: {message}")]
    Unreadable { message: String },
    /// The source document is not a well-formed dataset.
    #[error("user dataset malformed: {message}")]
    Malformed { message: String },
}

impl UserDatasetError {
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::Unreadable {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Port for loading all user records in document order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDataset: Send + Sync {
    /// Load every record, preserving document order.
    async fn load_users(&self) -> Result<Vec<UserRecord>, UserDatasetError>;
}

/// Dataset held in memory, shared read-only across requests.
///
/// # Examples
/// ```
/// use user_search::domain::UserRecord;
/// use user_search::domain::ports::{StaticUserDataset, UserDataset};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let dataset = StaticUserDataset::new(vec![UserRecord::new(1, "Ann Lee", 30, "", "")]);
/// let users = dataset.load_users().await.expect("in-memory load");
/// assert_eq!(users.len(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticUserDataset {
    users: Arc<[UserRecord]>,
}

impl StaticUserDataset {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDataset for StaticUserDataset {
    async fn load_users(&self) -> Result<Vec<UserRecord>, UserDatasetError> {
        Ok(self.users.to_vec())
    }
}
