use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::retrieval::{CourseCatalog, EmbeddingClient, PassageStore};

/// Shared application state injected into all route handlers via Axum
/// extractors. The indexes are read-only after startup, so cloning the
/// state shares them through `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: GroqClient,
    pub embedder: Arc<EmbeddingClient>,
    pub passages: Arc<PassageStore>,
    pub catalog: Arc<CourseCatalog>,
    pub config: Config,
}
