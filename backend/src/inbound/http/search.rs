//! Search endpoint.
//!
//! ```text
//! GET /?limit=10&offset=0&query=Hall&order_field=age&order_by=1
//! AccessToken: <token>
//! ```
//!
//! The token is checked before any parameter is looked at. A successful
//! search answers with the bare JSON array of matching users; whether more
//! pages exist is left to the caller, who can ask for one row more than it
//! needs.

use actix_web::{HttpRequest, get, web};
use tracing::debug;

use crate::domain::ports::ACCESS_TOKEN_HEADER;
use crate::domain::{RawQueryParams, SearchError, SearchRequest, UserRecord};
use crate::inbound::http::{ApiError, ApiResult, HttpState};

fn access_token(req: &HttpRequest) -> &str {
    req.headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Search users by substring, ordering and page window.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_search::inbound::http::search_users;
///
/// let app = App::new().service(search_users);
/// ```
#[get("/")]
pub async fn search_users(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<UserRecord>>> {
    if !state.tokens.verify(access_token(&req)) {
        debug!("search rejected: access token not accepted");
        return Err(ApiError::Unauthorized);
    }

    let raw = web::Query::<RawQueryParams>::from_query(req.query_string())
        .map_err(|err| {
            debug!(error = %err, "query string could not be decoded");
            ApiError::Rejected(SearchError::MalformedParams)
        })?
        .into_inner();
    let request = SearchRequest::try_from(raw)?;
    let page = state.search.search(&request).await?;
    Ok(web::Json(page.users))
}
