//! Filter, sort and paginate stages over one dataset snapshot.
//!
//! The stages are pure functions over owned record sequences. Relative input
//! order is the tie-break everywhere: filtering keeps it, the sort is stable,
//! and pagination slices without reordering.

use pagination::{PageRequest, PaginationError, paginate};
use serde::{Deserialize, Serialize};

use super::{OrderDirection, OrderField, SearchError, SearchRequest, UserRecord};

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Records on this page, in result order.
    pub users: Vec<UserRecord>,
    /// Whether records remain after this page.
    pub next_page: bool,
}

/// Keep records whose name or biography contains `query`.
///
/// An empty query keeps every record.
pub fn filter_users(mut users: Vec<UserRecord>, query: &str) -> Vec<UserRecord> {
    if !query.is_empty() {
        users.retain(|user| user.mentions(query));
    }
    users
}

/// Stable in-place sort by `field` in `direction`.
///
/// [`OrderDirection::AsIs`] leaves the sequence untouched. Descending order
/// reverses the comparator rather than the output, so records with equal
/// keys keep their input order in both directions.
pub fn sort_users(users: &mut [UserRecord], field: OrderField, direction: OrderDirection) {
    let compare = field.comparator();
    match direction {
        OrderDirection::AsIs => {}
        OrderDirection::Ascending => users.sort_by(compare),
        OrderDirection::Descending => users.sort_by(|a, b| compare(b, a)),
    }
}

/// Run filter, sort and paginate for one request.
///
/// # Errors
///
/// Returns [`SearchError::OffsetOutOfRange`] when the requested offset lies
/// beyond the filtered result set.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use user_search::domain::{
///     OrderDirection, OrderField, SearchRequest, UserRecord, run_pipeline,
/// };
///
/// let users = vec![
///     UserRecord::new(1, "Ann Lee", 30, "", "female"),
///     UserRecord::new(2, "Bob Ray", 20, "", "male"),
/// ];
/// let limit = NonZeroUsize::new(1).expect("non-zero");
/// let request = SearchRequest::new(limit, 0, "", OrderField::Age, OrderDirection::Ascending);
/// let page = run_pipeline(users, &request).expect("in range");
/// assert_eq!(page.users[0].id(), 2);
/// assert!(page.next_page);
/// ```
pub fn run_pipeline(
    users: Vec<UserRecord>,
    request: &SearchRequest,
) -> Result<SearchPage, SearchError> {
    let mut users = filter_users(users, request.query());
    sort_users(&mut users, request.order_field(), request.order_by());

    let page = paginate(users, PageRequest::new(request.offset(), request.limit()))
        .map_err(|PaginationError::OffsetOutOfRange { .. }| SearchError::OffsetOutOfRange)?;
    let (users, next_page) = page.into_parts();
    Ok(SearchPage { users, next_page })
}
