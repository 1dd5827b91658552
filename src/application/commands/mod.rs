pub mod cart;
pub mod categories;
pub mod products;

mod unique_slug;
