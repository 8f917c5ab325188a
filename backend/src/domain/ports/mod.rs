//! Domain ports and supporting types for the hexagonal boundary.

mod access_token_verifier;
mod user_dataset;
mod user_search;

#[cfg(test)]
pub use access_token_verifier::MockAccessTokenVerifier;
pub use access_token_verifier::{ACCESS_TOKEN_HEADER, AccessTokenVerifier, DenyAllTokenVerifier};
#[cfg(test)]
pub use user_dataset::MockUserDataset;
pub use user_dataset::{StaticUserDataset, UserDataset, UserDatasetError};
#[cfg(test)]
pub use user_search::MockUserSearch;
pub use user_search::{UserSearch, UserSearchError};
