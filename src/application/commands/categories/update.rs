use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        commands::unique_slug::write_with_unique_slug,
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    /// Rename a category. The slug is only recomputed when an explicit slug
    /// is given or the name changed.
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let name = CategoryName::new(command.name)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let slug_input = match command.slug.filter(|s| !s.trim().is_empty()) {
            Some(explicit) => Some(explicit),
            None if name != existing.name => Some(name.as_str().to_owned()),
            None => None,
        };

        let repo = Arc::clone(&self.repo);
        let updated = match slug_input {
            Some(input) => {
                let base = self.slugs.normalize(&input)?;
                write_with_unique_slug(&self.slugs, &base, Some(id), move |slug| {
                    let repo = Arc::clone(&repo);
                    let update = CategoryUpdate {
                        id,
                        name: name.clone(),
                        slug,
                    };
                    async move { repo.update(update).await }
                })
                .await?
            }
            None => {
                repo.update(CategoryUpdate {
                    id,
                    name,
                    slug: existing.slug,
                })
                .await?
            }
        };

        Ok(updated.into())
    }
}
