mod get_by_id;
mod get_by_slug;
mod list;
mod service;
mod similar;

pub use get_by_id::GetProductByIdQuery;
pub use get_by_slug::GetProductBySlugQuery;
pub use list::ListProductsQuery;
pub use service::ProductQueryService;
pub use similar::SimilarProductsQuery;
