use super::ProductQueryService;
use crate::{
    application::{
        dto::{Audience, ProductDto},
        error::ApplicationResult,
    },
    domain::product::ProductId,
};

pub struct GetProductByIdQuery {
    pub id: i64,
}

impl ProductQueryService {
    pub async fn get_product_by_id(
        &self,
        audience: Audience,
        query: GetProductByIdQuery,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(query.id)?;
        let product = self.read_repo.find_by_id(id).await?;
        Self::ensure_visible(audience, product).map(Into::into)
    }
}
