//! HTTP mapping for search failures.
//!
//! Only validation and bounds errors carry a body. Authentication and
//! internal failures are reported by status alone so nothing about the
//! dataset or the token store leaks to callers.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::UserSearchError;
use crate::domain::{ErrorResponse, SearchError};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The `AccessToken` header is missing or not accepted.
    #[error("missing or invalid access token")]
    Unauthorized,
    /// The request was well-formed HTTP but not a satisfiable search.
    #[error(transparent)]
    Rejected(#[from] SearchError),
    /// The server could not produce an answer.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<UserSearchError> for ApiError {
    fn from(err: UserSearchError) -> Self {
        match err {
            UserSearchError::Rejected { reason } => Self::Rejected(reason),
            UserSearchError::DatasetUnavailable { message } => Self::internal(message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Rejected(reason) => {
                HttpResponse::BadRequest().json(ErrorResponse::from(*reason))
            }
            Self::Internal { message } => {
                let trace_id = TraceId::current().map(|id| id.to_string());
                error!(trace_id = ?trace_id, message = %message, "search failed");
                HttpResponse::InternalServerError().finish()
            }
            Self::Unauthorized => HttpResponse::Unauthorized().finish(),
        }
    }
}
