use crate::domain::cart::{CartId, CartLine};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Key-value persistence for cart contents. Callers treat it as best-effort.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn load(&self, id: &CartId) -> DomainResult<Option<Vec<CartLine>>>;
    async fn save(&self, id: &CartId, lines: &[CartLine]) -> DomainResult<()>;
    async fn remove(&self, id: &CartId) -> DomainResult<()>;
}
