//! Driven port checking opaque access tokens.
//!
//! The domain only needs a yes/no answer; signing schemes and token storage
//! belong to adapters.

/// Request header carrying the caller's access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Port deciding whether a caller-supplied token grants access.
#[cfg_attr(test, mockall::automock)]
pub trait AccessTokenVerifier: Send + Sync {
    /// Return `true` when `token` is valid. Empty tokens are never valid.
    fn verify(&self, token: &str) -> bool;
}

/// Verifier that rejects every token.
///
/// Used when no tokens are configured so a misconfigured server fails closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllTokenVerifier;

impl AccessTokenVerifier for DenyAllTokenVerifier {
    fn verify(&self, _token: &str) -> bool {
        false
    }
}
