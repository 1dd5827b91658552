// src/infrastructure/security/admin_token.rs
use crate::application::ports::security::AdminTokenVerifier;

/// Compares presented bearer tokens with the configured admin token by
/// BLAKE3 digest. `blake3::Hash` equality runs in constant time.
#[derive(Clone)]
pub struct Blake3AdminTokenVerifier {
    expected: blake3::Hash,
}

impl Blake3AdminTokenVerifier {
    pub fn new(token: &str) -> Self {
        Self {
            expected: blake3::hash(token.as_bytes()),
        }
    }
}

impl AdminTokenVerifier for Blake3AdminTokenVerifier {
    fn verify(&self, token: &str) -> bool {
        !token.is_empty() && blake3::hash(token.as_bytes()) == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_token_passes() {
        let verifier = Blake3AdminTokenVerifier::new("s3cret-admin-token");
        assert!(verifier.verify("s3cret-admin-token"));
        assert!(!verifier.verify("s3cret-admin-token "));
        assert!(!verifier.verify(""));
    }
}
