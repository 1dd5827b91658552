pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductContent, ProductFilter, ProductUpdate};
pub use repository::{ProductReadRepository, ProductWriteRepository};
pub use value_objects::{
    Dimensions, DiscountPercentage, Price, ProductId, ProductImages, ProductStatus, ProductTitle,
    Stock, tag_list,
};
