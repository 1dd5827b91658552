use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryId;
use crate::domain::product::{
    Dimensions, DiscountPercentage, Price, Product, ProductContent, ProductImages, ProductStatus,
    ProductTitle, Stock, tag_list,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CategoryDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    /// Price after `discount_percentage` is applied.
    pub final_price: Decimal,
    pub discount_percentage: Decimal,
    pub stock: i32,
    pub materials: Vec<String>,
    pub style_tags: Vec<String>,
    pub room_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[schema(value_type = String, example = "PUBLISHED")]
    pub status: ProductStatus,
    pub featured: bool,
    pub images: Vec<String>,
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let final_price = product.effective_price().amount();
        Self {
            id: product.id.into(),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            price: product.price.amount(),
            final_price,
            discount_percentage: product.discount.value(),
            stock: product.stock.value(),
            materials: product.materials,
            style_tags: product.style_tags,
            room_tags: product.room_tags,
            width_cm: product.dimensions.width_cm,
            depth_cm: product.dimensions.depth_cm,
            height_cm: product.dimensions.height_cm,
            weight_kg: product.dimensions.weight_kg,
            status: product.status,
            featured: product.featured,
            images: product.images.into_inner(),
            categories: product.categories.into_iter().map(Into::into).collect(),
            published_at: product.published_at,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Admin form body used for both create and full-replacement update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub title: String,
    /// Desired slug; normalized and made unique before the write.
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stock: i64,
    pub price: Decimal,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub room_tags: Vec<String>,
    #[serde(default)]
    pub width_cm: Option<f64>,
    #[serde(default)]
    pub depth_cm: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "DRAFT")]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub featured: bool,
    pub images: Vec<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

impl ProductPayload {
    pub const MIN_SLUG_INPUT_LEN: usize = 3;

    /// Validate every field and split off the raw slug input.
    pub fn into_content(self) -> ApplicationResult<(ProductContent, String)> {
        if self.slug.trim().chars().count() < Self::MIN_SLUG_INPUT_LEN {
            return Err(ApplicationError::validation(format!(
                "slug must be at least {} characters",
                Self::MIN_SLUG_INPUT_LEN
            )));
        }

        let mut category_ids = Vec::with_capacity(self.category_ids.len());
        for raw in self.category_ids {
            let id = CategoryId::new(raw)?;
            if !category_ids.contains(&id) {
                category_ids.push(id);
            }
        }

        let description = self
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        let content = ProductContent {
            title: ProductTitle::new(self.title)?,
            description,
            price: Price::positive(self.price)?,
            stock: Stock::new(self.stock)?,
            materials: tag_list("materials", self.materials)?,
            style_tags: tag_list("style_tags", self.style_tags)?,
            room_tags: tag_list("room_tags", self.room_tags)?,
            dimensions: Dimensions::new(
                self.width_cm,
                self.depth_cm,
                self.height_cm,
                self.weight_kg,
            )?,
            discount: DiscountPercentage::new(self.discount_percentage.unwrap_or_default())?,
            status: self.status.unwrap_or_default(),
            featured: self.featured,
            images: ProductImages::new(self.images)?,
            category_ids,
        };

        Ok((content, self.slug))
    }
}
