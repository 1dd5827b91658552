// src/application/commands/products/update.rs
use std::sync::Arc;

use super::ProductCommandService;
use crate::{
    application::{
        commands::unique_slug::write_with_unique_slug,
        dto::{ProductDto, ProductPayload},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{ProductId, ProductUpdate},
};

/// Full replacement of a product's editable fields.
pub struct UpdateProductCommand {
    pub id: i64,
    pub payload: ProductPayload,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(command.id)?;
        let (content, slug_input) = command.payload.into_content()?;

        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        self.ensure_categories_exist(&content.category_ids).await?;

        let base = self.slugs.normalize(&slug_input)?;
        let now = self.clock.now();
        let published_at = content.published_at(existing.published_at, now);

        let repo = Arc::clone(&self.write_repo);
        let updated = write_with_unique_slug(&self.slugs, &base, Some(id), move |slug| {
            let repo = Arc::clone(&repo);
            let update = ProductUpdate {
                id,
                content: content.clone(),
                slug,
                published_at,
                updated_at: now,
            };
            async move { repo.update(update).await }
        })
        .await?;

        if updated.slug != existing.slug {
            tracing::info!(product_id = %id, from = %existing.slug, to = %updated.slug, "product slug changed");
        }
        Ok(updated.into())
    }
}
