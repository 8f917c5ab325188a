//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **dataset**: XML dataset decoding and file-backed `UserDataset`.
//! - **access_tokens**: hashed shared-token `AccessTokenVerifier`.
//!
//! Adapters translate between infrastructure representations and domain
//! types. They contain no search logic.

pub mod access_tokens;
pub mod dataset;
