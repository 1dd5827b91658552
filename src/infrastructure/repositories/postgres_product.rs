// src/infrastructure/repositories/postgres_product.rs
use std::collections::HashMap;

use super::error::{map_slug_write, map_sqlx};
use super::postgres_category::CategoryRow;
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    Dimensions, DiscountPercentage, NewProduct, Price, Product, ProductContent, ProductFilter,
    ProductId, ProductImages, ProductReadRepository, ProductStatus, ProductTitle, ProductUpdate,
    ProductWriteRepository, Stock,
};
use crate::domain::slug::{Slug, SlugOwnerLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const PRODUCT_COLUMNS: &str = "p.id, p.title, p.slug, p.description, p.price, p.stock, \
     p.materials, p.style_tags, p.room_tags, p.width_cm, p.depth_cm, p.height_cm, p.weight_kg, \
     p.discount_percentage, p.status, p.featured, p.images, p.published_at, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    slug: String,
    description: Option<String>,
    price: Decimal,
    stock: i32,
    materials: Vec<String>,
    style_tags: Vec<String>,
    room_tags: Vec<String>,
    width_cm: Option<f64>,
    depth_cm: Option<f64>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    discount_percentage: Decimal,
    status: String,
    featured: bool,
    images: Vec<String>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self, categories: Vec<Category>) -> DomainResult<Product> {
        Ok(Product {
            id: ProductId::new(self.id)?,
            title: ProductTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            description: self.description,
            price: Price::new(self.price)?,
            stock: Stock::new(i64::from(self.stock))?,
            materials: self.materials,
            style_tags: self.style_tags,
            room_tags: self.room_tags,
            dimensions: Dimensions::new(
                self.width_cm,
                self.depth_cm,
                self.height_cm,
                self.weight_kg,
            )?,
            discount: DiscountPercentage::new(self.discount_percentage)?,
            status: self.status.parse::<ProductStatus>()?,
            featured: self.featured,
            images: ProductImages::new(self.images)?,
            categories,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct LinkedCategoryRow {
    product_id: i64,
    #[sqlx(flatten)]
    category: CategoryRow,
}

/// Load the categories of every product in `ids`, keyed by product id.
async fn load_categories(
    conn: &mut PgConnection,
    ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<Category>>> {
    let mut by_product: HashMap<i64, Vec<Category>> = HashMap::new();
    if ids.is_empty() {
        return Ok(by_product);
    }

    let rows = sqlx::query_as::<_, LinkedCategoryRow>(
        "SELECT pc.product_id, c.id, c.name, c.slug
         FROM product_categories pc
         JOIN categories c ON c.id = pc.category_id
         WHERE pc.product_id = ANY($1)
         ORDER BY c.name ASC, c.id ASC",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        by_product
            .entry(row.product_id)
            .or_default()
            .push(Category::try_from(row.category)?);
    }
    Ok(by_product)
}

async fn hydrate(conn: &mut PgConnection, rows: Vec<ProductRow>) -> DomainResult<Vec<Product>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut categories = load_categories(conn, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let linked = categories.remove(&row.id).unwrap_or_default();
            row.into_product(linked)
        })
        .collect()
}

async fn replace_links(
    conn: &mut PgConnection,
    product_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if category_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO product_categories (product_id, category_id) ");
    builder.push_values(category_ids, |mut row, category_id| {
        row.push_bind(product_id).push_bind(i64::from(*category_id));
    });
    builder
        .build()
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

fn push_content<'a>(builder: &mut QueryBuilder<'a, Postgres>, content: &'a ProductContent) {
    let mut values = builder.separated(", ");
    values
        .push_bind(content.title.as_str())
        .push_bind(content.description.as_deref())
        .push_bind(content.price.amount())
        .push_bind(content.stock.value())
        .push_bind(content.materials.clone())
        .push_bind(content.style_tags.clone())
        .push_bind(content.room_tags.clone())
        .push_bind(content.dimensions.width_cm)
        .push_bind(content.dimensions.depth_cm)
        .push_bind(content.dimensions.height_cm)
        .push_bind(content.dimensions.weight_kg)
        .push_bind(content.discount.value())
        .push_bind(content.status.as_str())
        .push_bind(content.featured)
        .push_bind(content.images.as_slice().to_vec());
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            content,
            slug,
            published_at,
            created_at,
            updated_at,
        } = product;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO products AS p (title, description, price, stock, materials, style_tags, \
             room_tags, width_cm, depth_cm, height_cm, weight_kg, discount_percentage, status, \
             featured, images, slug, published_at, created_at, updated_at) VALUES (",
        );
        push_content(&mut builder, &content);
        builder.push(", ");
        builder.push_bind(slug.as_str());
        builder.push(", ");
        builder.push_bind(published_at);
        builder.push(", ");
        builder.push_bind(created_at);
        builder.push(", ");
        builder.push_bind(updated_at);
        builder.push(") RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| map_slug_write(err, &slug))?;

        replace_links(&mut *tx, row.id, &content.category_ids).await?;
        let mut products = hydrate(&mut *tx, vec![row]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        products
            .pop()
            .ok_or_else(|| DomainError::Persistence("inserted product vanished".into()))
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            content,
            slug,
            published_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "UPDATE products AS p SET (title, description, price, stock, materials, style_tags, \
             room_tags, width_cm, depth_cm, height_cm, weight_kg, discount_percentage, status, \
             featured, images, slug, published_at, updated_at) = ROW(",
        );
        push_content(&mut builder, &content);
        builder.push(", ");
        builder.push_bind(slug.as_str());
        builder.push(", ");
        builder.push_bind(published_at);
        builder.push(", ");
        builder.push_bind(updated_at);
        builder.push(") WHERE p.id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| map_slug_write(err, &slug))?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        replace_links(&mut *tx, row.id, &content.category_ids).await?;
        let mut products = hydrate(&mut *tx, vec![row]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        products
            .pop()
            .ok_or_else(|| DomainError::NotFound("product not found".into()))
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

impl PostgresProductReadRepository {
    async fn fetch_one_where(&self, column: &str, value: i64) -> DomainResult<Option<Product>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.{column} = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(value)
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(hydrate(&mut *conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn fetch_many(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<Vec<Product>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;
        hydrate(&mut *conn, rows).await
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.fetch_one_where("id", i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let owner = self.find_slug_owner(slug).await?;
        match owner {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ProductFilter) -> DomainResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE TRUE"));

        if !filter.include_unpublished {
            builder.push(" AND p.status = ");
            builder.push_bind(ProductStatus::Published.as_str());
        }
        if let Some(featured) = filter.featured {
            builder.push(" AND p.featured = ");
            builder.push_bind(featured);
        }
        if let Some(category) = &filter.category_slug {
            builder.push(
                " AND EXISTS (SELECT 1 FROM product_categories pc \
                 JOIN categories c ON c.id = pc.category_id \
                 WHERE pc.product_id = p.id AND c.slug = ",
            );
            builder.push_bind(category.clone());
            builder.push(")");
        }

        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(filter.limit.clamp(1, ProductFilter::MAX_LIMIT)));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.offset));

        self.fetch_many(builder).await
    }

    async fn list_similar(
        &self,
        id: ProductId,
        category_slugs: &[String],
        limit: u32,
    ) -> DomainResult<Vec<Product>> {
        if category_slugs.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.status = "));
        builder.push_bind(ProductStatus::Published.as_str());
        builder.push(" AND p.id <> ");
        builder.push_bind(i64::from(id));
        builder.push(
            " AND EXISTS (SELECT 1 FROM product_categories pc \
             JOIN categories c ON c.id = pc.category_id \
             WHERE pc.product_id = p.id AND c.slug = ANY(",
        );
        builder.push_bind(category_slugs.to_vec());
        builder.push(")) ORDER BY p.featured DESC, p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(limit.max(1)));

        self.fetch_many(builder).await
    }
}

#[async_trait]
impl SlugOwnerLookup<ProductId> for PostgresProductReadRepository {
    async fn find_slug_owner(&self, slug: &Slug) -> DomainResult<Option<ProductId>> {
        let owner: Option<i64> = sqlx::query_scalar("SELECT id FROM products WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        owner.map(ProductId::new).transpose()
    }
}
