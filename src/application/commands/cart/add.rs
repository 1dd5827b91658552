use super::CartService;
use crate::{
    application::{
        dto::CartDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        cart::{CartId, CartProduct},
        product::ProductId,
    },
};

pub struct AddCartItemCommand {
    pub cart_id: CartId,
    pub product_id: i64,
    pub quantity: u32,
}

impl CartService {
    /// Add units of a published product. The price and display fields are
    /// captured from the catalog the first time the product enters the cart.
    pub async fn add_item(&self, command: AddCartItemCommand) -> ApplicationResult<CartDto> {
        let product_id = ProductId::new(command.product_id)?;
        if command.quantity == 0 {
            return Err(ApplicationError::validation(
                "quantity to add must be at least 1",
            ));
        }

        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .filter(|p| p.is_published())
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let mut loaded = self.load(command.cart_id).await;
        loaded
            .cart
            .add_item(CartProduct::from(&product), command.quantity)?;
        self.write_back(command.cart_id, &loaded).await;
        let cart = loaded.cart;

        tracing::debug!(
            cart_id = %command.cart_id,
            product_id = %product_id,
            quantity = cart.item_quantity(product_id),
            "cart item added"
        );
        Ok(CartDto::from_cart(command.cart_id, &cart))
    }
}
