// src/application/commands/products/create.rs
use std::sync::Arc;

use super::ProductCommandService;
use crate::{
    application::{
        commands::unique_slug::write_with_unique_slug,
        dto::{ProductDto, ProductPayload},
        error::ApplicationResult,
    },
    domain::product::NewProduct,
};

pub struct CreateProductCommand {
    pub payload: ProductPayload,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let (content, slug_input) = command.payload.into_content()?;
        self.ensure_categories_exist(&content.category_ids).await?;

        let base = self.slugs.normalize(&slug_input)?;
        let now = self.clock.now();
        let published_at = content.published_at(None, now);

        let repo = Arc::clone(&self.write_repo);
        let created = write_with_unique_slug(&self.slugs, &base, None, move |slug| {
            let repo = Arc::clone(&repo);
            let new_product = NewProduct {
                content: content.clone(),
                slug,
                published_at,
                created_at: now,
                updated_at: now,
            };
            async move { repo.insert(new_product).await }
        })
        .await?;

        tracing::info!(product_id = %created.id, slug = %created.slug, "product created");
        Ok(created.into())
    }
}
