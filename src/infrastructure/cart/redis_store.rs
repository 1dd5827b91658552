// src/infrastructure/cart/redis_store.rs
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

use crate::domain::{
    cart::{CartId, CartLine, CartStorage},
    errors::{DomainError, DomainResult},
};

/// Default lifetime of an untouched cart: 30 days.
pub const DEFAULT_CART_TTL_SECS: u64 = 60 * 60 * 24 * 30;

/// Cart storage backed by Redis. Each cart is a JSON array of lines under
/// `cart:{id}`; every save refreshes the expiry.
#[derive(Clone)]
pub struct RedisCartStorage {
    pool: Pool,
    ttl_secs: u64,
}

impl RedisCartStorage {
    /// Build a pool from a redis URL (e.g. `redis://:password@host:6379/0`).
    pub fn from_url(url: &str, ttl_secs: u64) -> DomainResult<Self> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| DomainError::Persistence(err.to_string()))?;

        Ok(Self {
            pool,
            ttl_secs: ttl_secs.max(1),
        })
    }

    fn key(id: &CartId) -> String {
        format!("cart:{id}")
    }

    async fn conn(&self) -> DomainResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| DomainError::Persistence(err.to_string()))
    }
}

fn redis_err(err: redis::RedisError) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[async_trait]
impl CartStorage for RedisCartStorage {
    async fn load(&self, id: &CartId) -> DomainResult<Option<Vec<CartLine>>> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn.get(Self::key(id)).await.map_err(redis_err)?;
        raw.map(|json| {
            serde_json::from_str::<Vec<CartLine>>(&json)
                .map_err(|err| DomainError::Persistence(format!("corrupt cart {id}: {err}")))
        })
        .transpose()
    }

    async fn save(&self, id: &CartId, lines: &[CartLine]) -> DomainResult<()> {
        let json = serde_json::to_string(lines)
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(Self::key(id), json, self.ttl_secs)
            .await
            .map_err(redis_err)
    }

    async fn remove(&self, id: &CartId) -> DomainResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(Self::key(id)).await.map_err(redis_err)
    }
}
