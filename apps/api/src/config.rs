use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables abort startup before the listener binds.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Static curated-course catalog (JSON). Missing file disables curated
    /// enrichment rather than failing startup.
    pub course_catalog_path: String,
    /// Pre-chunked grounding passages (JSON). Missing file disables
    /// retrieval grounding rather than failing startup.
    pub passages_path: String,
    pub embedding_endpoint: String,
    pub embedding_model: String,
    pub embedding_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            course_catalog_path: std::env::var("COURSE_CATALOG_PATH")
                .unwrap_or_else(|_| "nptel_courses.json".to_string()),
            passages_path: std::env::var("PASSAGES_PATH")
                .unwrap_or_else(|_| "passages.json".to_string()),
            embedding_endpoint: std::env::var("EMBEDDING_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:11434/v1/embeddings".to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "all-mpnet-base-v2".to_string()),
            embedding_api_key: std::env::var("EMBEDDING_API_KEY").ok(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
