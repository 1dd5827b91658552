use super::ProductCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

impl ProductCommandService {
    /// Reject payloads that link to categories which do not exist.
    pub(super) async fn ensure_categories_exist(&self, ids: &[CategoryId]) -> ApplicationResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let missing = self.category_repo.find_missing(ids).await?;
        if missing.is_empty() {
            return Ok(());
        }

        let listed = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ApplicationError::validation(format!(
            "unknown category ids: {listed}"
        )))
    }
}
