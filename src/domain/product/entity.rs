// src/domain/product/entity.rs
use crate::domain::category::{CategoryId, CategoryRef};
use crate::domain::product::value_objects::{
    Dimensions, DiscountPercentage, Price, ProductId, ProductImages, ProductStatus, ProductTitle,
    Stock,
};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub stock: Stock,
    pub materials: Vec<String>,
    pub style_tags: Vec<String>,
    pub room_tags: Vec<String>,
    pub dimensions: Dimensions,
    pub discount: DiscountPercentage,
    pub status: ProductStatus,
    pub featured: bool,
    pub images: ProductImages,
    pub categories: Vec<CategoryRef>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_published(&self) -> bool {
        self.status == ProductStatus::Published
    }

    /// Price after the product's discount percentage.
    pub fn effective_price(&self) -> Price {
        self.price.discounted(self.discount)
    }

    pub fn category_slugs(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| c.slug.as_str().to_owned())
            .collect()
    }
}

/// Validated editable fields shared by create and full-replacement update.
#[derive(Debug, Clone)]
pub struct ProductContent {
    pub title: ProductTitle,
    pub description: Option<String>,
    pub price: Price,
    pub stock: Stock,
    pub materials: Vec<String>,
    pub style_tags: Vec<String>,
    pub room_tags: Vec<String>,
    pub dimensions: Dimensions,
    pub discount: DiscountPercentage,
    pub status: ProductStatus,
    pub featured: bool,
    pub images: ProductImages,
    pub category_ids: Vec<CategoryId>,
}

impl ProductContent {
    /// Publication timestamp for content written at `now`, given the one
    /// already stored (if any).
    pub fn published_at(
        &self,
        existing: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        match (self.status, existing) {
            (_, Some(at)) => Some(at),
            (ProductStatus::Published, None) => Some(now),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub content: ProductContent,
    pub slug: Slug,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub content: ProductContent,
    pub slug: Slug,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub include_unpublished: bool,
    pub category_slug: Option<String>,
    pub featured: Option<bool>,
    pub limit: u32,
    pub offset: u32,
}

impl ProductFilter {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            include_unpublished: false,
            category_slug: None,
            featured: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
