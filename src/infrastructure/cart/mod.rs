// src/infrastructure/cart/mod.rs
mod memory;
mod redis_store;

pub use memory::InMemoryCartStorage;
pub use redis_store::{DEFAULT_CART_TTL_SECS, RedisCartStorage};
