// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        category::CategoryRepository,
        product::{ProductId, ProductReadRepository, ProductWriteRepository},
        slug::SlugAllocator,
    },
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<SlugAllocator<ProductId>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slugs: Arc<SlugAllocator<ProductId>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slugs,
            clock,
        }
    }
}
