use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::db::{create_pool, init_schema};
use api::llm_client::{self, GroqClient};
use api::retrieval::{CourseCatalog, EmbeddingClient, PassageStore};
use api::routes::build_router;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roadmap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    // Initialize completion-service client
    let llm = GroqClient::new(config.groq_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize embedding client and the two read-only vector indexes
    let embedder = Arc::new(EmbeddingClient::new(
        config.embedding_endpoint.clone(),
        config.embedding_model.clone(),
        config.embedding_api_key.clone(),
    )?);

    let passages = Arc::new(PassageStore::load(&config.passages_path, embedder.as_ref()).await?);
    let catalog =
        Arc::new(CourseCatalog::load(&config.course_catalog_path, embedder.as_ref()).await?);

    // Build app state
    let state = AppState {
        db: pool,
        llm,
        embedder,
        passages,
        catalog,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
