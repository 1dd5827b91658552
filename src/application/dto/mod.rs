pub mod auth;
pub mod cart;
pub mod categories;
pub mod products;

pub use auth::Audience;
pub use cart::{CartDto, CartItemQuantityDto, CartLineDto};
pub use categories::CategoryDto;
pub use products::{ProductDto, ProductPayload};
