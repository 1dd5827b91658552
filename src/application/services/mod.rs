// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            cart::CartService, categories::CategoryCommandService,
            products::ProductCommandService,
        },
        error::{ApplicationError, ApplicationResult},
        ports::{AdminTokenVerifierPort, ClockPort, SlugGeneratorPort},
        queries::{categories::CategoryQueryService, products::ProductQueryService},
    },
    domain::{
        cart::CartStorage,
        category::{CategoryId, CategoryRepository},
        product::{ProductId, ProductReadRepository, ProductWriteRepository},
        slug::{SlugAllocator, SlugOwnerLookup},
    },
};

pub struct ApplicationServices {
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub carts: Arc<CartService>,
    admin_verifier: Arc<AdminTokenVerifierPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_read_repo: Arc<dyn ProductReadRepository>,
        product_write_repo: Arc<dyn ProductWriteRepository>,
        product_slugs: Arc<dyn SlugOwnerLookup<ProductId>>,
        category_repo: Arc<dyn CategoryRepository>,
        category_slugs: Arc<dyn SlugOwnerLookup<CategoryId>>,
        cart_storage: Arc<dyn CartStorage>,
        admin_verifier: Arc<AdminTokenVerifierPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        slug_probe_limit: u32,
    ) -> Self {
        let product_allocator = Arc::new(SlugAllocator::new(
            product_slugs,
            Arc::clone(&slugger),
            slug_probe_limit,
        ));
        let category_allocator = Arc::new(SlugAllocator::new(
            category_slugs,
            Arc::clone(&slugger),
            slug_probe_limit,
        ));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_write_repo),
            Arc::clone(&product_read_repo),
            Arc::clone(&category_repo),
            product_allocator,
            Arc::clone(&clock),
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            category_allocator,
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let carts = Arc::new(CartService::new(
            cart_storage,
            Arc::clone(&product_read_repo),
        ));

        Self {
            product_commands,
            product_queries,
            category_commands,
            category_queries,
            carts,
            admin_verifier,
        }
    }

    /// Check a raw bearer token against the configured admin credential.
    pub fn authorize_admin(&self, token: &str) -> ApplicationResult<()> {
        if self.admin_verifier.verify(token) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid admin token"))
        }
    }
}
