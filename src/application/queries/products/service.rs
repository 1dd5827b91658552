use std::sync::Arc;

use crate::{
    application::{
        dto::Audience,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{Product, ProductReadRepository},
};

pub struct ProductQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
}

impl ProductQueryService {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Unpublished products are reported as missing to the storefront.
    pub(super) fn ensure_visible(
        audience: Audience,
        product: Option<Product>,
    ) -> ApplicationResult<Product> {
        match product {
            Some(product) if product.is_published() || audience.is_admin() => Ok(product),
            _ => Err(ApplicationError::not_found("product not found")),
        }
    }
}
