use super::CartService;
use crate::{
    application::dto::CartDto,
    domain::cart::{Cart, CartId},
};

impl CartService {
    pub async fn clear_cart(&self, id: CartId) -> CartDto {
        let cart = Cart::new();
        self.persist(id, &cart).await;
        tracing::debug!(cart_id = %id, "cart cleared");
        CartDto::from_cart(id, &cart)
    }
}
