use super::ProductQueryService;
use crate::{
    application::{
        dto::{Audience, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetProductBySlugQuery {
    pub slug: String,
}

impl ProductQueryService {
    pub async fn get_product_by_slug(
        &self,
        audience: Audience,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDto> {
        // A malformed slug cannot belong to any product.
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self.read_repo.find_by_slug(&slug).await?;
        Self::ensure_visible(audience, product).map(Into::into)
    }
}
