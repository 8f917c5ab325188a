//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use user_search::domain::ports::{AccessTokenVerifier, DenyAllTokenVerifier, UserDataset};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) dataset: Arc<dyn UserDataset>,
    pub(crate) tokens: Arc<dyn AccessTokenVerifier>,
}

impl ServerConfig {
    /// Serve `dataset` on `bind_addr`. No token is accepted until
    /// [`ServerConfig::with_tokens`] installs a verifier.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, dataset: Arc<dyn UserDataset>) -> Self {
        Self {
            bind_addr,
            dataset,
            tokens: Arc::new(DenyAllTokenVerifier),
        }
    }

    /// Replace the access token verifier.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Arc<dyn AccessTokenVerifier>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by unit tests; the server destructures the config")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use user_search::domain::ports::StaticUserDataset;
    use user_search::outbound::access_tokens::HashedTokenVerifier;

    fn config() -> ServerConfig {
        let addr = "127.0.0.1:0".parse().expect("addr");
        ServerConfig::new(addr, Arc::new(StaticUserDataset::new(Vec::new())))
    }

    #[rstest]
    fn denies_every_token_by_default() {
        let config = config();

        assert_eq!(config.bind_addr().port(), 0);
        assert!(!config.tokens.verify("54"));
    }

    #[rstest]
    fn installs_the_given_verifier() {
        let config =
            config().with_tokens(Arc::new(HashedTokenVerifier::new(vec!["54".to_owned()])));

        assert!(config.tokens.verify("54"));
    }
}
