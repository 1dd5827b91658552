// src/infrastructure/security/mod.rs
mod admin_token;

pub use admin_token::Blake3AdminTokenVerifier;
