//! Domain primitives, the search pipeline and its ports.
//!
//! Purpose: define the user record model, the validated search request and
//! the filter/sort/paginate pipeline independently of HTTP or storage.
//!
//! Public surface:
//! - `UserRecord`: one immutable dataset entry.
//! - `RawQueryParams` / `SearchRequest`: untyped and validated queries.
//! - `SearchError` / `ErrorResponse`: error taxonomy and its wire envelope.
//! - `run_pipeline`: the per-request search composition.
//! - `UserSearchService`: `UserSearch` port backed by a `UserDataset`.

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search_request;
pub mod user;
pub mod user_search;

pub use self::error::{ErrorResponse, SearchError};
pub use self::pipeline::{SearchPage, filter_users, run_pipeline, sort_users};
pub use self::search_request::{OrderDirection, OrderField, RawQueryParams, SearchRequest};
pub use self::user::UserRecord;
pub use self::user_search::UserSearchService;
