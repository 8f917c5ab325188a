//! Client-side failure taxonomy.

use reqwest::StatusCode;

use crate::domain::SearchError;

/// Errors returned by [`SearchClient::find_users`](super::SearchClient::find_users).
#[derive(Debug, thiserror::Error)]
pub enum SearchClientError {
    /// The server did not answer within the configured timeout.
    #[error("timeout for {query}")]
    Timeout { query: String },
    /// The request never produced an HTTP response.
    #[error("search request failed")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// The server did not accept the access token.
    #[error("bad AccessToken")]
    BadAccessToken,
    /// The server failed while answering.
    #[error("SearchServer fatal error")]
    FatalServer,
    /// The response body did not have the expected shape.
    #[error("cant unpack {what} json: {message}")]
    ResponseDecode { what: &'static str, message: String },
    /// The server rejected the search with a known error.
    #[error(transparent)]
    Rejected(SearchError),
    /// The server answered 400 with a message this client does not know.
    #[error("unknown bad request error: {message}")]
    UnknownBadRequest { message: String },
    /// Any status the protocol does not define.
    #[error("unexpected response status {status}")]
    UnexpectedStatus { status: StatusCode },
}

impl SearchClientError {
    /// Rejection tag, when the server refused the search itself.
    pub fn search_error(&self) -> Option<SearchError> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
