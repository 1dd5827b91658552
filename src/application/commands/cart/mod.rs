// src/application/commands/cart/mod.rs
mod add;
mod clear;
mod quantity;
mod remove;
mod service;
mod view;

pub use add::AddCartItemCommand;
pub use quantity::SetCartItemQuantityCommand;
pub use service::CartService;
