use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductFilter, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when the slug index rejects the row.
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    /// Removes the product together with its category links.
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    async fn list(&self, filter: &ProductFilter) -> DomainResult<Vec<Product>>;
    /// Published products sharing at least one category slug, excluding `id`.
    async fn list_similar(
        &self,
        id: ProductId,
        category_slugs: &[String],
        limit: u32,
    ) -> DomainResult<Vec<Product>>;
}
