use super::CartService;
use crate::{
    application::{dto::CartDto, error::ApplicationResult},
    domain::{cart::CartId, product::ProductId},
};

impl CartService {
    /// Take a single unit away. Unknown products leave the cart unchanged.
    pub async fn remove_one(&self, id: CartId, product_id: i64) -> ApplicationResult<CartDto> {
        let product_id = ProductId::new(product_id)?;
        let mut loaded = self.load(id).await;
        loaded.cart.remove_one(product_id);
        self.write_back(id, &loaded).await;
        Ok(CartDto::from_cart(id, &loaded.cart))
    }

    pub async fn remove_item(&self, id: CartId, product_id: i64) -> ApplicationResult<CartDto> {
        let product_id = ProductId::new(product_id)?;
        let mut loaded = self.load(id).await;
        loaded.cart.remove_item(product_id);
        self.write_back(id, &loaded).await;
        Ok(CartDto::from_cart(id, &loaded.cart))
    }
}
