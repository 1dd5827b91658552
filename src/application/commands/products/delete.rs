// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{application::error::ApplicationResult, domain::product::ProductId};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    pub async fn delete_product(&self, command: DeleteProductCommand) -> ApplicationResult<()> {
        let id = ProductId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
