// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by the catalog and cart use cases.
///
/// Storage and slug-allocation failures arrive wrapped in `Domain`; the other
/// variants are raised by the services themselves.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request data the services reject before touching storage, such as a
    /// zero cart quantity or unknown category ids.
    #[error("validation error: {0}")]
    Validation(String),

    /// Product or category absent, or hidden from the storefront.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// A slug could not be claimed within the write retry budget.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing or wrong admin token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Storefront caller asking for admin-only data.
    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
}
