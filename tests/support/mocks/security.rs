// tests/support/mocks/security.rs
use mueble_core::application::ports::security::AdminTokenVerifier;

pub const ADMIN_TOKEN: &str = "test-admin-token-0123456789";

#[derive(Clone, Copy, Default)]
pub struct StaticAdminVerifier;

impl AdminTokenVerifier for StaticAdminVerifier {
    fn verify(&self, token: &str) -> bool {
        token == ADMIN_TOKEN
    }
}
