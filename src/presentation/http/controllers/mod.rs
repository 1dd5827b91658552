// src/presentation/http/controllers/mod.rs
pub mod carts;
pub mod categories;
pub mod products;
