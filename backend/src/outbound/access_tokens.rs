//! Shared-secret access token verification.
//!
//! Configured tokens are reduced to SHA-256 digests when the verifier is
//! built and the plaintext is wiped. Only a short fingerprint of each digest
//! is ever logged, so operators can confirm which tokens are loaded.

use sha2::{Digest, Sha256};
use tracing::info;
use zeroize::Zeroizing;

use crate::domain::ports::AccessTokenVerifier;

/// Length of the logged fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

type TokenDigest = [u8; 32];

fn digest(token: &str) -> TokenDigest {
    let mut out = TokenDigest::default();
    out.copy_from_slice(&Sha256::digest(token.as_bytes()));
    out
}

/// Truncated hex rendering of a digest, safe to print.
fn fingerprint(token_digest: &TokenDigest) -> String {
    hex::encode(&token_digest[..FINGERPRINT_BYTES])
}

/// Accepts any token whose digest matches one of the configured tokens.
#[derive(Debug, Clone, Default)]
pub struct HashedTokenVerifier {
    digests: Vec<TokenDigest>,
}

impl HashedTokenVerifier {
    /// Hash `tokens`, skipping blank entries, then zero the plaintext.
    pub fn new(tokens: Vec<String>) -> Self {
        let tokens = Zeroizing::new(tokens);
        let mut digests = Vec::with_capacity(tokens.len());
        for token in tokens.iter() {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                continue;
            }
            let token_digest = digest(trimmed);
            if !digests.contains(&token_digest) {
                info!(
                    fingerprint = %fingerprint(&token_digest),
                    "access token loaded"
                );
                digests.push(token_digest);
            }
        }
        Self { digests }
    }

    /// Number of distinct tokens accepted.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

impl AccessTokenVerifier for HashedTokenVerifier {
    fn verify(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let candidate = digest(token);
        self.digests.iter().any(|known| *known == candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn verifier() -> HashedTokenVerifier {
        HashedTokenVerifier::new(vec!["54".to_owned(), "s3cret-token".to_owned()])
    }

    #[rstest]
    #[case("54", true)]
    #[case("s3cret-token", true)]
    #[case("55", false)]
    #[case("S3CRET-TOKEN", false)]
    #[case("54 ", false)]
    #[case("", false)]
    fn verifies_configured_tokens(
        verifier: HashedTokenVerifier,
        #[case] token: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(verifier.verify(token), expected);
    }

    #[rstest]
    fn blank_and_duplicate_entries_are_dropped() {
        let verifier = HashedTokenVerifier::new(vec![
            String::new(),
            "   ".to_owned(),
            "54".to_owned(),
            " 54 ".to_owned(),
        ]);

        assert_eq!(verifier.len(), 1);
        assert!(verifier.verify("54"));
        assert!(!verifier.verify(""));
    }

    #[rstest]
    fn without_tokens_nothing_verifies() {
        let verifier = HashedTokenVerifier::new(Vec::new());

        assert!(verifier.is_empty());
        assert!(!verifier.verify("54"));
    }

    #[rstest]
    fn fingerprint_is_short_stable_hex() {
        let first = fingerprint(&digest("54"));

        assert_eq!(first, fingerprint(&digest("54")));
        assert_ne!(first, fingerprint(&digest("55")));
        assert_eq!(first.len(), FINGERPRINT_BYTES * 2);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
