// tests/support/mocks/carts.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mueble_core::domain::{
    cart::{CartId, CartLine, CartStorage},
    errors::{DomainError, DomainResult},
};

/// Cart storage whose contents tests can inspect and seed directly.
#[derive(Default)]
pub struct MemoryCarts {
    carts: Mutex<HashMap<CartId, Vec<CartLine>>>,
}

impl MemoryCarts {
    pub fn stored(&self, id: &CartId) -> Option<Vec<CartLine>> {
        self.carts.lock().unwrap().get(id).cloned()
    }

    pub fn put(&self, id: CartId, lines: Vec<CartLine>) {
        self.carts.lock().unwrap().insert(id, lines);
    }
}

#[async_trait]
impl CartStorage for MemoryCarts {
    async fn load(&self, id: &CartId) -> DomainResult<Option<Vec<CartLine>>> {
        Ok(self.stored(id))
    }

    async fn save(&self, id: &CartId, lines: &[CartLine]) -> DomainResult<()> {
        self.put(*id, lines.to_vec());
        Ok(())
    }

    async fn remove(&self, id: &CartId) -> DomainResult<()> {
        self.carts.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Storage whose every call fails, like an unreachable Redis.
pub struct BrokenCartStorage;

#[async_trait]
impl CartStorage for BrokenCartStorage {
    async fn load(&self, _id: &CartId) -> DomainResult<Option<Vec<CartLine>>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn save(&self, _id: &CartId, _lines: &[CartLine]) -> DomainResult<()> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn remove(&self, _id: &CartId) -> DomainResult<()> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// Wraps [`MemoryCarts`] and fails the next `load` when armed, like a Redis
/// timeout that clears up on its own.
#[derive(Default)]
pub struct FlakyCartStorage {
    pub inner: MemoryCarts,
    fail_next_load: Mutex<bool>,
}

impl FlakyCartStorage {
    pub fn fail_next_load(&self) {
        *self.fail_next_load.lock().unwrap() = true;
    }
}

#[async_trait]
impl CartStorage for FlakyCartStorage {
    async fn load(&self, id: &CartId) -> DomainResult<Option<Vec<CartLine>>> {
        let fail = std::mem::take(&mut *self.fail_next_load.lock().unwrap());
        if fail {
            return Err(DomainError::Persistence("read timed out".into()));
        }
        self.inner.load(id).await
    }

    async fn save(&self, id: &CartId, lines: &[CartLine]) -> DomainResult<()> {
        self.inner.save(id, lines).await
    }

    async fn remove(&self, id: &CartId) -> DomainResult<()> {
        self.inner.remove(id).await
    }
}
