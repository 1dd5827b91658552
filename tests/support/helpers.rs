// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use mueble_core::application::{
    ports::{AdminTokenVerifierPort, ClockPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use mueble_core::domain::{
    cart::CartStorage,
    category::{CategoryId, CategoryRepository},
    product::{ProductId, ProductReadRepository, ProductWriteRepository},
    slug::{DEFAULT_PROBE_LIMIT, SlugOwnerLookup},
};
use mueble_core::infrastructure::util::DefaultSlugGenerator;
use mueble_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{ADMIN_TOKEN, FixedClock, InMemoryCatalog, MemoryCarts, StaticAdminVerifier};

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub catalog: InMemoryCatalog,
    pub carts: Arc<MemoryCarts>,
}

pub fn build_services_with(
    catalog: &InMemoryCatalog,
    product_writer: Arc<dyn ProductWriteRepository>,
    cart_storage: Arc<dyn CartStorage>,
    slug_probe_limit: u32,
) -> Arc<ApplicationServices> {
    let product_read: Arc<dyn ProductReadRepository> = Arc::new(catalog.clone());
    let product_slugs: Arc<dyn SlugOwnerLookup<ProductId>> = Arc::new(catalog.clone());
    let category_repo: Arc<dyn CategoryRepository> = Arc::new(catalog.clone());
    let category_slugs: Arc<dyn SlugOwnerLookup<CategoryId>> = Arc::new(catalog.clone());
    let admin: Arc<AdminTokenVerifierPort> = Arc::new(StaticAdminVerifier);
    let clock: Arc<ClockPort> = Arc::new(FixedClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        product_read,
        product_writer,
        product_slugs,
        category_repo,
        category_slugs,
        cart_storage,
        admin,
        clock,
        slugger,
        slug_probe_limit,
    ))
}

pub fn build_test_app() -> TestApp {
    let catalog = InMemoryCatalog::new();
    let carts = Arc::new(MemoryCarts::default());
    let services = build_services_with(
        &catalog,
        Arc::new(catalog.clone()),
        carts.clone(),
        DEFAULT_PROBE_LIMIT,
    );
    TestApp {
        services,
        catalog,
        carts,
    }
}

pub fn make_test_router(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn json_request(method: &str, uri: &str, body: Option<Value>, admin: bool) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if admin {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
