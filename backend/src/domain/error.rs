//! Search error taxonomy shared by the HTTP adapter and the client.
//!
//! The wire format carries errors as `{"error": "<message>"}`. The message is
//! a rendering of a [`SearchError`] tag; both sides treat the tag as the source
//! of truth and [`SearchError::from_message`] reverses the rendering.

use serde::{Deserialize, Serialize};

/// Recoverable search failures surfaced to callers as client errors.
///
/// # Examples
/// ```
/// use user_search::domain::SearchError;
///
/// let rendered = SearchError::BadLimit.message();
/// assert_eq!(SearchError::from_message(rendered), Some(SearchError::BadLimit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SearchError {
    /// `limit`, `offset` or `order_by` is missing or not an integer.
    #[error("bad query params")]
    MalformedParams,
    /// `limit` is zero or negative.
    #[error("bad limit param")]
    BadLimit,
    /// `offset` is negative.
    #[error("bad offset param")]
    BadOffset,
    /// `order_field` names an unsortable field.
    #[error("OrderField invalid")]
    BadOrderField,
    /// `order_by` is not one of `-1`, `0`, `1`.
    #[error("bad order_by param")]
    BadOrderBy,
    /// `offset` points past the filtered result set.
    #[error("offset exceeds available results")]
    OffsetOutOfRange,
}

impl SearchError {
    /// Every variant, in validation precedence order.
    pub const ALL: [Self; 6] = [
        Self::MalformedParams,
        Self::BadLimit,
        Self::BadOffset,
        Self::BadOrderField,
        Self::BadOrderBy,
        Self::OffsetOutOfRange,
    ];

    /// Wire message for this error.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MalformedParams => "bad query params",
            Self::BadLimit => "bad limit param",
            Self::BadOffset => "bad offset param",
            Self::BadOrderField => "OrderField invalid",
            Self::BadOrderBy => "bad order_by param",
            Self::OffsetOutOfRange => "offset exceeds available results",
        }
    }

    /// Recover the tag from a wire message by exact match.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.message() == message)
    }
}

/// JSON envelope for error responses: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message; for known failures a [`SearchError`] rendering.
    pub error: String,
}

impl ErrorResponse {
    /// Build an envelope around an arbitrary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Interpret the message as a known [`SearchError`].
    pub fn search_error(&self) -> Option<SearchError> {
        SearchError::from_message(&self.error)
    }
}

impl From<SearchError> for ErrorResponse {
    fn from(value: SearchError) -> Self {
        Self::new(value.message())
    }
}
