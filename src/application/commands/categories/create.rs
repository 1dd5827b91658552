use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        commands::unique_slug::write_with_unique_slug, dto::CategoryDto, error::ApplicationResult,
    },
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    /// Falls back to the name when absent.
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug_input = command
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| name.as_str().to_owned());
        let base = self.slugs.normalize(&slug_input)?;

        let repo = Arc::clone(&self.repo);
        let created = write_with_unique_slug(&self.slugs, &base, None, move |slug| {
            let repo = Arc::clone(&repo);
            let category = NewCategory {
                name: name.clone(),
                slug,
            };
            async move { repo.insert(category).await }
        })
        .await?;

        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
