use crate::domain::product::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Display fields captured when a product first enters the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// What the cart needs to know about a product to add it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartProduct {
    pub id: ProductId,
    pub unit_price: Price,
    pub snapshot: ProductSnapshot,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            unit_price: product.effective_price(),
            snapshot: ProductSnapshot {
                title: product.title.as_str().to_owned(),
                slug: product.slug.as_str().to_owned(),
                image: product.images.main().map(str::to_owned),
                categories: product
                    .categories
                    .iter()
                    .map(|c| c.name.as_str().to_owned())
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Price,
    pub snapshot: ProductSnapshot,
}

impl CartLine {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
