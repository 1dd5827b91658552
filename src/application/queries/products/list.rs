use super::ProductQueryService;
use crate::{
    application::{
        dto::{Audience, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductFilter,
};

#[derive(Debug, Default)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub include_drafts: bool,
    /// 0 selects the default page size.
    pub limit: u32,
    pub offset: u32,
}

impl ProductQueryService {
    pub async fn list_products(
        &self,
        audience: Audience,
        query: ListProductsQuery,
    ) -> ApplicationResult<Vec<ProductDto>> {
        let filter = Self::build_filter(audience, query)?;
        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub(super) fn build_filter(
        audience: Audience,
        query: ListProductsQuery,
    ) -> ApplicationResult<ProductFilter> {
        if query.include_drafts && !audience.is_admin() {
            return Err(ApplicationError::forbidden(
                "admin token required for draft access",
            ));
        }

        let limit = if query.limit == 0 {
            ProductFilter::DEFAULT_LIMIT
        } else {
            query.limit.min(ProductFilter::MAX_LIMIT)
        };

        let category_slug = query
            .category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());

        Ok(ProductFilter {
            include_unpublished: query.include_drafts,
            category_slug,
            featured: query.featured,
            limit,
            offset: query.offset,
        })
    }
}
