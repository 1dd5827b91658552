pub mod aggregate;
pub mod line;
pub mod storage;
pub mod value_objects;

pub use aggregate::Cart;
pub use line::{CartLine, CartProduct, ProductSnapshot};
pub use storage::CartStorage;
pub use value_objects::CartId;
