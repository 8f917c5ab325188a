//! Reqwest-backed search client.
//!
//! The endpoint answers with a bare array, so the client asks for one row
//! more than the caller wants and uses the surplus row to decide whether
//! another page exists.

use std::num::NonZeroUsize;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;
use url::form_urlencoded;
use zeroize::Zeroizing;

use super::SearchClientError;
use crate::domain::ports::ACCESS_TOKEN_HEADER;
use crate::domain::{ErrorResponse, SearchPage, SearchRequest, UserRecord};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
const DEFAULT_MAX_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(25) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Transport and paging limits for [`SearchClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchClientConfig {
    /// Upper bound for one whole request, connect included.
    pub timeout: Duration,
    /// Largest page the client will ask for; bigger limits are clamped.
    pub max_page_size: NonZeroUsize,
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

/// Client for one search server.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
    access_token: Zeroizing<String>,
    max_page_size: NonZeroUsize,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("max_page_size", &self.max_page_size)
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    /// Build a client for the endpoint at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        access_token: impl Into<String>,
        config: SearchClientConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: Zeroizing::new(access_token.into()),
            max_page_size: config.max_page_size,
        })
    }

    /// Fetch one page of users.
    ///
    /// The requested limit is clamped to the configured maximum page size;
    /// the returned page never holds more rows than that clamped limit.
    ///
    /// # Errors
    ///
    /// See [`SearchClientError`] for the possible outcomes.
    pub async fn find_users(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchPage, SearchClientError> {
        let limit = request.limit().min(self.max_page_size);
        let query = encode_query(&request.with_limit(limit.saturating_add(1)));
        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));

        let response = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .send()
            .await
            .map_err(|err| map_transport_error(err, &query))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_transport_error(err, &query))?;

        let users = decode_response(status, body.as_ref())?;
        let page = into_page(users, limit);
        debug!(
            %status,
            returned = page.users.len(),
            next_page = page.next_page,
            "search page fetched"
        );
        Ok(page)
    }
}

fn encode_query(request: &SearchRequest) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &request.limit().to_string())
        .append_pair("offset", &request.offset().to_string())
        .append_pair("order_by", &request.order_by().as_wire().to_string())
        .append_pair("order_field", request.order_field().as_str())
        .append_pair("query", request.query())
        .finish()
}

fn map_transport_error(error: reqwest::Error, query: &str) -> SearchClientError {
    if error.is_timeout() {
        SearchClientError::Timeout {
            query: query.to_owned(),
        }
    } else {
        SearchClientError::Transport { source: error }
    }
}

fn decode_response(status: StatusCode, body: &[u8]) -> Result<Vec<UserRecord>, SearchClientError> {
    match status {
        StatusCode::OK => {
            serde_json::from_slice(body).map_err(|err| SearchClientError::ResponseDecode {
                what: "result",
                message: err.to_string(),
            })
        }
        StatusCode::UNAUTHORIZED => Err(SearchClientError::BadAccessToken),
        StatusCode::INTERNAL_SERVER_ERROR => Err(SearchClientError::FatalServer),
        StatusCode::BAD_REQUEST => {
            let envelope: ErrorResponse =
                serde_json::from_slice(body).map_err(|err| SearchClientError::ResponseDecode {
                    what: "error",
                    message: err.to_string(),
                })?;
            Err(match envelope.search_error() {
                Some(reason) => SearchClientError::Rejected(reason),
                None => SearchClientError::UnknownBadRequest {
                    message: envelope.error,
                },
            })
        }
        other => Err(SearchClientError::UnexpectedStatus { status: other }),
    }
}

fn into_page(mut users: Vec<UserRecord>, limit: NonZeroUsize) -> SearchPage {
    let next_page = users.len() > limit.get();
    users.truncate(limit.get());
    SearchPage { users, next_page }
}
