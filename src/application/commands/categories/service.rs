use std::sync::Arc;

use crate::domain::{
    category::{CategoryId, CategoryRepository},
    slug::SlugAllocator,
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<SlugAllocator<CategoryId>>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugs: Arc<SlugAllocator<CategoryId>>) -> Self {
        Self { repo, slugs }
    }
}
