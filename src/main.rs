use anyhow::Result;
use mueble_core::application::{
    ports::{AdminTokenVerifierPort, ClockPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use mueble_core::config::AppConfig;
use mueble_core::domain::{
    cart::CartStorage,
    category::{CategoryId, CategoryRepository},
    product::{ProductId, ProductReadRepository, ProductWriteRepository},
    slug::SlugOwnerLookup,
};
use mueble_core::infrastructure::{
    cart::{InMemoryCartStorage, RedisCartStorage},
    database,
    repositories::{
        PostgresCategoryRepository, PostgresProductReadRepository, PostgresProductWriteRepository,
    },
    security::Blake3AdminTokenVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use mueble_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let product_read = Arc::new(PostgresProductReadRepository::new(pool.clone()));
    let product_read_repo: Arc<dyn ProductReadRepository> = product_read.clone();
    let product_slugs: Arc<dyn SlugOwnerLookup<ProductId>> = product_read;
    let product_write_repo: Arc<dyn ProductWriteRepository> =
        Arc::new(PostgresProductWriteRepository::new(pool.clone()));

    let categories = Arc::new(PostgresCategoryRepository::new(pool));
    let category_repo: Arc<dyn CategoryRepository> = categories.clone();
    let category_slugs: Arc<dyn SlugOwnerLookup<CategoryId>> = categories;

    let cart_storage: Arc<dyn CartStorage> = match config.redis_url() {
        Some(url) => {
            tracing::info!("cart storage: redis");
            Arc::new(RedisCartStorage::from_url(url, config.cart_ttl().as_secs())?)
        }
        None => {
            tracing::warn!("REDIS_URL not set, carts are kept in process memory");
            Arc::new(InMemoryCartStorage::new(config.cart_ttl()))
        }
    };

    let admin_verifier: Arc<AdminTokenVerifierPort> =
        Arc::new(Blake3AdminTokenVerifier::new(config.admin_api_token()));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        product_read_repo,
        product_write_repo,
        product_slugs,
        category_repo,
        category_slugs,
        cart_storage,
        admin_verifier,
        clock,
        slugger,
        config.slug_probe_limit(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
