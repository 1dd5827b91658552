// tests/support/mocks/catalog.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mueble_core::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
    errors::{DomainError, DomainResult},
    product::{
        NewProduct, Product, ProductContent, ProductFilter, ProductId, ProductReadRepository,
        ProductUpdate, ProductWriteRepository,
    },
    slug::{Slug, SlugOwnerLookup},
};

#[derive(Default)]
struct State {
    products: BTreeMap<i64, Product>,
    categories: BTreeMap<i64, Category>,
    next_product: i64,
    next_category: i64,
}

impl State {
    fn product_slug_owner(&self, slug: &Slug) -> Option<ProductId> {
        self.products
            .values()
            .find(|p| &p.slug == slug)
            .map(|p| p.id)
    }

    fn category_slug_owner(&self, slug: &Slug) -> Option<CategoryId> {
        self.categories
            .values()
            .find(|c| &c.slug == slug)
            .map(|c| c.id)
    }

    fn linked(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        ids.iter()
            .map(|id| {
                self.categories
                    .get(&id.0)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound("category not found".into()))
            })
            .collect()
    }
}

/// In-memory stand-in for the Postgres catalog. Slug uniqueness is enforced
/// the way the unique indexes do it.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<State>>,
}

fn materialize(
    id: ProductId,
    content: ProductContent,
    slug: Slug,
    categories: Vec<Category>,
    published_at: Option<chrono::DateTime<chrono::Utc>>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
) -> Product {
    Product {
        id,
        title: content.title,
        slug,
        description: content.description,
        price: content.price,
        stock: content.stock,
        materials: content.materials,
        style_tags: content.style_tags,
        room_tags: content.room_tags,
        dimensions: content.dimensions,
        discount: content.discount,
        status: content.status,
        featured: content.featured,
        images: content.images,
        categories,
        published_at,
        created_at,
        updated_at,
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .products
            .values()
            .map(|p| p.slug.as_str().to_owned())
            .collect()
    }

    pub fn product(&self, id: i64) -> Option<Product> {
        self.state.lock().unwrap().products.get(&id).cloned()
    }

    fn insert_product(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if state.product_slug_owner(&product.slug).is_some() {
            return Err(DomainError::DuplicateSlug(product.slug.to_string()));
        }
        let categories = state.linked(&product.content.category_ids)?;
        state.next_product += 1;
        let id = ProductId(state.next_product);
        let stored = materialize(
            id,
            product.content,
            product.slug,
            categories,
            product.published_at,
            product.created_at,
            product.updated_at,
        );
        state.products.insert(id.0, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        self.insert_product(product)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if let Some(owner) = state.product_slug_owner(&update.slug) {
            if owner != update.id {
                return Err(DomainError::DuplicateSlug(update.slug.to_string()));
            }
        }
        let created_at = state
            .products
            .get(&update.id.0)
            .map(|p| p.created_at)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        let categories = state.linked(&update.content.category_ids)?;
        let stored = materialize(
            update.id,
            update.content,
            update.slug,
            categories,
            update.published_at,
            created_at,
            update.updated_at,
        );
        state.products.insert(update.id.0, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .products
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("product not found".into()))
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.product(id.0))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        let mut matches: Vec<Product> = state
            .products
            .values()
            .filter(|p| filter.include_unpublished || p.is_published())
            .filter(|p| filter.featured.is_none_or(|f| p.featured == f))
            .filter(|p| {
                filter
                    .category_slug
                    .as_ref()
                    .is_none_or(|slug| p.category_slugs().contains(slug))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(matches
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn list_similar(
        &self,
        id: ProductId,
        category_slugs: &[String],
        limit: u32,
    ) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .products
            .values()
            .filter(|p| p.id != id && p.is_published())
            .filter(|p| p.category_slugs().iter().any(|s| category_slugs.contains(s)))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SlugOwnerLookup<ProductId> for InMemoryCatalog {
    async fn find_slug_owner(&self, slug: &Slug) -> DomainResult<Option<ProductId>> {
        Ok(self.state.lock().unwrap().product_slug_owner(slug))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut all: Vec<Category> = state.categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.state.lock().unwrap().categories.get(&id.0).cloned())
    }

    async fn find_missing(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategoryId>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !state.categories.contains_key(&id.0))
            .collect())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.category_slug_owner(&category.slug).is_some() {
            return Err(DomainError::DuplicateSlug(category.slug.to_string()));
        }
        state.next_category += 1;
        let stored = Category {
            id: CategoryId(state.next_category),
            name: category.name,
            slug: category.slug,
        };
        state.categories.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if let Some(owner) = state.category_slug_owner(&update.slug) {
            if owner != update.id {
                return Err(DomainError::DuplicateSlug(update.slug.to_string()));
            }
        }
        if !state.categories.contains_key(&update.id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let stored = Category {
            id: update.id,
            name: update.name,
            slug: update.slug,
        };
        state.categories.insert(stored.id.0, stored.clone());
        for product in state.products.values_mut() {
            for linked in product.categories.iter_mut().filter(|c| c.id == stored.id) {
                *linked = stored.clone();
            }
        }
        Ok(stored)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.categories.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for product in state.products.values_mut() {
            product.categories.retain(|c| c.id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl SlugOwnerLookup<CategoryId> for InMemoryCatalog {
    async fn find_slug_owner(&self, slug: &Slug) -> DomainResult<Option<CategoryId>> {
        Ok(self.state.lock().unwrap().category_slug_owner(slug))
    }
}

/// Write repository that loses the slug race a fixed number of times: right
/// before each of the first `losses` inserts or updates, a competing writer
/// claims the very slug that was just allocated.
pub struct SlugRaceWriter {
    catalog: InMemoryCatalog,
    losses: Mutex<u32>,
    competitor: NewProduct,
}

impl SlugRaceWriter {
    pub fn new(catalog: InMemoryCatalog, losses: u32, competitor: NewProduct) -> Self {
        Self {
            catalog,
            losses: Mutex::new(losses),
            competitor,
        }
    }

    fn maybe_steal(&self, slug: &Slug) -> DomainResult<()> {
        let lose = {
            let mut losses = self.losses.lock().unwrap();
            if *losses > 0 {
                *losses -= 1;
                true
            } else {
                false
            }
        };
        if lose {
            let mut competitor = self.competitor.clone();
            competitor.slug = slug.clone();
            self.catalog.insert_product(competitor)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProductWriteRepository for SlugRaceWriter {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        self.maybe_steal(&product.slug)?;
        self.catalog.insert_product(product)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        self.maybe_steal(&update.slug)?;
        ProductWriteRepository::update(&self.catalog, update).await
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        ProductWriteRepository::delete(&self.catalog, id).await
    }
}
