use super::CartService;
use crate::{
    application::{dto::CartDto, error::ApplicationResult},
    domain::{cart::CartId, product::ProductId},
};

pub struct SetCartItemQuantityCommand {
    pub cart_id: CartId,
    pub product_id: i64,
    /// 0 removes the line.
    pub quantity: u32,
}

impl CartService {
    pub async fn set_item_quantity(
        &self,
        command: SetCartItemQuantityCommand,
    ) -> ApplicationResult<CartDto> {
        let product_id = ProductId::new(command.product_id)?;
        let mut loaded = self.load(command.cart_id).await;
        loaded.cart.set_item_quantity(product_id, command.quantity);
        self.write_back(command.cart_id, &loaded).await;
        Ok(CartDto::from_cart(command.cart_id, &loaded.cart))
    }
}
