// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::{ProductDto, ProductPayload},
    queries::products::{
        GetProductByIdQuery, GetProductBySlugQuery, ListProductsQuery, SimilarProductsQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAuthenticated, Caller};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Category slug to filter by.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    /// Include drafts and archived products. Admin only.
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SimilarParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Catalog page, newest first.", body = [ProductDto]),
        (status = 403, description = "Drafts requested without admin token.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Caller(audience): Caller,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    let query = ListProductsQuery {
        category: params.category,
        featured: params.featured,
        include_drafts: params.include_drafts,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .product_queries
        .list_products(audience, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = ProductDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Caller(audience): Caller,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(audience, GetProductByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, body = ProductDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Caller(audience): Caller,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(audience, GetProductBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}/similar",
    params(("id" = i64, Path, description = "Product id"), SimilarParams),
    responses(
        (status = 200, description = "Published products sharing a category.", body = [ProductDto]),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn similar_products(
    Extension(state): Extension<HttpState>,
    Caller(audience): Caller,
    Path(id): Path<i64>,
    Query(params): Query<SimilarParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .similar_products(
            audience,
            SimilarProductsQuery {
                id,
                limit: params.limit,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductPayload,
    responses(
        (status = 201, body = ProductDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 409, description = "Slug could not be claimed.", body = ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Json(payload): Json<ProductPayload>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let product = state
        .services
        .product_commands
        .create_product(CreateProductCommand { payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, body = ProductDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .update_product(UpdateProductCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product and its category links removed."),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
