// src/application/ports/security.rs

/// Checks bearer tokens presented to the admin endpoints.
pub trait AdminTokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> bool;
}
