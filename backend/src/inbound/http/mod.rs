//! HTTP inbound adapter exposing the search endpoint.

pub mod error;
pub mod search;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use search::search_users;
pub use state::HttpState;
