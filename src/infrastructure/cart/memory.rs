use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    cart::{CartId, CartLine, CartStorage},
    errors::DomainResult,
};

struct StoredCart {
    lines: Vec<CartLine>,
    expires_at: Instant,
}

/// Process-local cart storage for development and single-instance setups.
/// Contents are lost on restart. Entries expire after the configured TTL,
/// which every save renews, and expired entries are swept on write.
pub struct InMemoryCartStorage {
    carts: RwLock<HashMap<CartId, StoredCart>>,
    ttl: Duration,
}

impl InMemoryCartStorage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            carts: RwLock::default(),
            ttl,
        }
    }
}

#[async_trait]
impl CartStorage for InMemoryCartStorage {
    async fn load(&self, id: &CartId) -> DomainResult<Option<Vec<CartLine>>> {
        let now = Instant::now();
        Ok(self
            .carts
            .read()
            .await
            .get(id)
            .filter(|stored| stored.expires_at > now)
            .map(|stored| stored.lines.clone()))
    }

    async fn save(&self, id: &CartId, lines: &[CartLine]) -> DomainResult<()> {
        let now = Instant::now();
        let mut carts = self.carts.write().await;
        carts.retain(|_, stored| stored.expires_at > now);
        carts.insert(
            *id,
            StoredCart {
                lines: lines.to_vec(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, id: &CartId) -> DomainResult<()> {
        self.carts.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::ProductSnapshot;
    use crate::domain::product::{Price, ProductId};
    use rust_decimal::Decimal;

    fn line(id: i64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId(id),
            quantity,
            unit_price: Price::new(Decimal::from(12)).unwrap(),
            snapshot: ProductSnapshot {
                title: "Banqueta".into(),
                slug: "banqueta".into(),
                image: None,
                categories: vec![],
            },
        }
    }

    #[tokio::test]
    async fn saved_lines_can_be_loaded_and_removed() {
        let storage = InMemoryCartStorage::new(Duration::from_secs(60));
        let id = CartId::generate();
        assert!(storage.load(&id).await.unwrap().is_none());

        storage.save(&id, &[line(1, 2), line(2, 1)]).await.unwrap();
        let loaded = storage.load(&id).await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].quantity, 2);

        storage.remove(&id).await.unwrap();
        assert!(storage.load(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_carts_are_gone_and_swept_on_write() {
        let storage = InMemoryCartStorage::new(Duration::ZERO);
        let stale = CartId::generate();
        storage.save(&stale, &[line(1, 1)]).await.unwrap();
        assert!(storage.load(&stale).await.unwrap().is_none());

        storage.save(&CartId::generate(), &[line(2, 1)]).await.unwrap();
        let carts = storage.carts.read().await;
        assert!(!carts.contains_key(&stale));
        assert_eq!(carts.len(), 1);
    }
}
