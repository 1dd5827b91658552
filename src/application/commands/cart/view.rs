use super::CartService;
use crate::{
    application::{
        dto::{CartDto, CartItemQuantityDto},
        error::ApplicationResult,
    },
    domain::{
        cart::{Cart, CartId},
        product::ProductId,
    },
};

impl CartService {
    /// Hand out a fresh cart id. Nothing is stored until the first item lands.
    pub fn create_cart(&self) -> CartDto {
        let id = CartId::generate();
        tracing::debug!(cart_id = %id, "cart created");
        CartDto::from_cart(id, &Cart::new())
    }

    pub async fn get_cart(&self, id: CartId) -> CartDto {
        let loaded = self.load(id).await;
        CartDto::from_cart(id, &loaded.cart)
    }

    pub async fn item_quantity(
        &self,
        id: CartId,
        product_id: i64,
    ) -> ApplicationResult<CartItemQuantityDto> {
        let product = ProductId::new(product_id)?;
        let loaded = self.load(id).await;
        Ok(CartItemQuantityDto {
            product_id,
            quantity: loaded.cart.item_quantity(product),
        })
    }
}
