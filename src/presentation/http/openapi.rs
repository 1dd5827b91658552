// src/presentation/http/openapi.rs
use crate::application::dto::{
    CartDto, CartItemQuantityDto, CartLineDto, CategoryDto, ProductDto, ProductPayload,
};
use crate::presentation::http::controllers::{carts, categories, products};
use crate::presentation::http::error::ErrorResponse;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        products::list_products,
        products::get_product,
        products::get_product_by_slug,
        products::similar_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        carts::create_cart,
        carts::get_cart,
        carts::clear_cart,
        carts::add_item,
        carts::item_quantity,
        carts::set_item_quantity,
        carts::remove_item,
        carts::remove_one,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            ProductDto,
            ProductPayload,
            CategoryDto,
            CartDto,
            CartLineDto,
            CartItemQuantityDto,
            categories::CategoryRequest,
            carts::AddCartItemRequest,
            carts::SetQuantityRequest
        )
    ),
    tags(
        (name = "Products", description = "Catalog browsing and product administration"),
        (name = "Categories", description = "Category administration"),
        (name = "Carts", description = "Shopping cart operations"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Mueble API",
        description = "Furniture storefront backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "adminToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Write the pretty-printed document to `path`, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
