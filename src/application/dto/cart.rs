use crate::domain::cart::{Cart, CartId, CartLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartLineDto {
    pub product_id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.into(),
            title: line.snapshot.title.clone(),
            slug: line.snapshot.slug.clone(),
            image: line.snapshot.image.clone(),
            categories: line.snapshot.categories.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.amount(),
            line_total: line.line_total().amount(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartDto {
    pub id: Uuid,
    pub lines: Vec<CartLineDto>,
    /// Units across all lines.
    pub total_items: u64,
    /// Distinct products.
    pub unique_items: usize,
    pub subtotal: Decimal,
}

impl CartDto {
    pub fn from_cart(id: CartId, cart: &Cart) -> Self {
        Self {
            id: *id.as_uuid(),
            lines: cart.lines().iter().map(CartLineDto::from).collect(),
            total_items: cart.total_items(),
            unique_items: cart.unique_items(),
            subtotal: cart.subtotal().amount(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemQuantityDto {
    pub product_id: i64,
    pub quantity: u32,
}
