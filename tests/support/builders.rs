// tests/support/builders.rs
use mueble_core::application::dto::ProductPayload;
use mueble_core::domain::{
    product::{
        Dimensions, DiscountPercentage, NewProduct, Price, ProductContent, ProductImages,
        ProductStatus, ProductTitle, Stock,
    },
    slug::Slug,
};
use rust_decimal::Decimal;

use super::mocks::fixed_now;

pub struct PayloadBuilder {
    payload: ProductPayload,
}

impl PayloadBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            payload: ProductPayload {
                title: title.into(),
                slug: title.into(),
                description: Some("Hecha a mano".into()),
                stock: 5,
                price: Decimal::from(100),
                materials: vec!["roble".into()],
                style_tags: vec!["nordico".into()],
                room_tags: vec!["living".into()],
                width_cm: Some(120.0),
                depth_cm: Some(60.0),
                height_cm: Some(75.0),
                weight_kg: None,
                discount_percentage: None,
                status: Some(ProductStatus::Published),
                featured: false,
                images: vec!["https://cdn.example.com/products/main.jpg".into()],
                category_ids: vec![],
            },
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.payload.slug = slug.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.payload.price = Decimal::from(price);
        self
    }

    pub fn discount(mut self, pct: i64) -> Self {
        self.payload.discount_percentage = Some(Decimal::from(pct));
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.payload.status = Some(status);
        self
    }

    pub fn categories(mut self, ids: &[i64]) -> Self {
        self.payload.category_ids = ids.to_vec();
        self
    }

    pub fn build(self) -> ProductPayload {
        self.payload
    }
}

/// A published product row as another writer would store it.
pub fn competing_product(title: &str) -> NewProduct {
    let now = fixed_now();
    NewProduct {
        content: ProductContent {
            title: ProductTitle::new(title).unwrap(),
            description: None,
            price: Price::positive(Decimal::from(50)).unwrap(),
            stock: Stock::new(1).unwrap(),
            materials: vec![],
            style_tags: vec![],
            room_tags: vec![],
            dimensions: Dimensions::default(),
            discount: DiscountPercentage::new(Decimal::ZERO).unwrap(),
            status: ProductStatus::Published,
            featured: false,
            images: ProductImages::new(vec!["https://cdn.example.com/other.jpg".into()]).unwrap(),
            category_ids: vec![],
        },
        slug: Slug::new("placeholder").unwrap(),
        published_at: Some(now),
        created_at: now,
        updated_at: now,
    }
}
