// src/presentation/http/controllers/carts.rs
use crate::application::{
    commands::cart::{AddCartItemCommand, SetCartItemQuantityCommand},
    dto::{CartDto, CartItemQuantityDto},
    error::ApplicationError,
};
use crate::domain::cart::CartId;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    /// Units to add; defaults to 1.
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetQuantityRequest {
    /// Exact quantity; 0 removes the line.
    pub quantity: u32,
}

fn cart_id(raw: &str) -> HttpResult<CartId> {
    CartId::parse(raw).map_err(|err| HttpError::from_error(ApplicationError::from(err)))
}

#[utoipa::path(
    post,
    path = "/api/v1/carts",
    responses((status = 201, description = "Empty cart with a fresh id.", body = CartDto)),
    tag = "Carts"
)]
pub async fn create_cart(Extension(state): Extension<HttpState>) -> (StatusCode, Json<CartDto>) {
    (StatusCode::CREATED, Json(state.services.carts.create_cart()))
}

#[utoipa::path(
    get,
    path = "/api/v1/carts/{cart_id}",
    params(("cart_id" = String, Path, description = "Cart id (UUID)")),
    responses(
        (status = 200, body = CartDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<CartDto>> {
    let id = cart_id(&raw_id)?;
    Ok(Json(state.services.carts.get_cart(id).await))
}

#[utoipa::path(
    delete,
    path = "/api/v1/carts/{cart_id}",
    params(("cart_id" = String, Path, description = "Cart id (UUID)")),
    responses(
        (status = 200, description = "Cart emptied.", body = CartDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn clear_cart(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<CartDto>> {
    let id = cart_id(&raw_id)?;
    Ok(Json(state.services.carts.clear_cart(id).await))
}

#[utoipa::path(
    post,
    path = "/api/v1/carts/{cart_id}/items",
    params(("cart_id" = String, Path, description = "Cart id (UUID)")),
    request_body = AddCartItemRequest,
    responses(
        (status = 200, body = CartDto),
        (status = 400, body = ErrorResponse),
        (status = 404, description = "Unknown or unpublished product.", body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn add_item(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<AddCartItemRequest>,
) -> HttpResult<Json<CartDto>> {
    let command = AddCartItemCommand {
        cart_id: cart_id(&raw_id)?,
        product_id: payload.product_id,
        quantity: payload.quantity.unwrap_or(1),
    };

    state
        .services
        .carts
        .add_item(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/carts/{cart_id}/items/{product_id}",
    params(
        ("cart_id" = String, Path, description = "Cart id (UUID)"),
        ("product_id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Quantity in the cart, 0 when absent.", body = CartItemQuantityDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn item_quantity(
    Extension(state): Extension<HttpState>,
    Path((raw_id, product_id)): Path<(String, i64)>,
) -> HttpResult<Json<CartItemQuantityDto>> {
    let id = cart_id(&raw_id)?;
    state
        .services
        .carts
        .item_quantity(id, product_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/carts/{cart_id}/items/{product_id}",
    params(
        ("cart_id" = String, Path, description = "Cart id (UUID)"),
        ("product_id" = i64, Path, description = "Product id")
    ),
    request_body = SetQuantityRequest,
    responses(
        (status = 200, body = CartDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn set_item_quantity(
    Extension(state): Extension<HttpState>,
    Path((raw_id, product_id)): Path<(String, i64)>,
    Json(payload): Json<SetQuantityRequest>,
) -> HttpResult<Json<CartDto>> {
    let command = SetCartItemQuantityCommand {
        cart_id: cart_id(&raw_id)?,
        product_id,
        quantity: payload.quantity,
    };

    state
        .services
        .carts
        .set_item_quantity(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/carts/{cart_id}/items/{product_id}",
    params(
        ("cart_id" = String, Path, description = "Cart id (UUID)"),
        ("product_id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Line removed regardless of quantity.", body = CartDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn remove_item(
    Extension(state): Extension<HttpState>,
    Path((raw_id, product_id)): Path<(String, i64)>,
) -> HttpResult<Json<CartDto>> {
    let id = cart_id(&raw_id)?;
    state
        .services
        .carts
        .remove_item(id, product_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/carts/{cart_id}/items/{product_id}/decrement",
    params(
        ("cart_id" = String, Path, description = "Cart id (UUID)"),
        ("product_id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "One unit removed; the line goes away at zero.", body = CartDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Carts"
)]
pub async fn remove_one(
    Extension(state): Extension<HttpState>,
    Path((raw_id, product_id)): Path<(String, i64)>,
) -> HttpResult<Json<CartDto>> {
    let id = cart_id(&raw_id)?;
    state
        .services
        .carts
        .remove_one(id, product_id)
        .await
        .into_http()
        .map(Json)
}
