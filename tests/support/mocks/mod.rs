// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod carts;
pub mod catalog;
pub mod security;
pub mod time;

pub use carts::{BrokenCartStorage, FlakyCartStorage, MemoryCarts};
pub use catalog::{InMemoryCatalog, SlugRaceWriter};
pub use security::{ADMIN_TOKEN, StaticAdminVerifier};
pub use time::{FixedClock, fixed_now};
