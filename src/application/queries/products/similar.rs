use super::ProductQueryService;
use crate::{
    application::{
        dto::{Audience, ProductDto},
        error::ApplicationResult,
    },
    domain::product::ProductId,
};

pub struct SimilarProductsQuery {
    pub id: i64,
    pub limit: Option<u32>,
}

impl SimilarProductsQuery {
    pub const DEFAULT_LIMIT: u32 = 8;
    pub const MAX_LIMIT: u32 = 24;
}

impl ProductQueryService {
    /// Published products sharing at least one category with the given one.
    pub async fn similar_products(
        &self,
        audience: Audience,
        query: SimilarProductsQuery,
    ) -> ApplicationResult<Vec<ProductDto>> {
        let id = ProductId::new(query.id)?;
        let product = Self::ensure_visible(audience, self.read_repo.find_by_id(id).await?)?;

        let slugs = product.category_slugs();
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let limit = query
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(SimilarProductsQuery::DEFAULT_LIMIT)
            .min(SimilarProductsQuery::MAX_LIMIT);

        let records = self.read_repo.list_similar(id, &slugs, limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
