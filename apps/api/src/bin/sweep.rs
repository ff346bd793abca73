//! Offline batch sweep: regenerates a roadmap for every stored goal.
//!
//! Goals are processed sequentially; a failure on one goal is logged and
//! skipped so the sweep continues. Pass `--out-dir <dir>` to also write
//! each enriched roadmap as a pretty-printed JSON artifact.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::db::{create_pool, init_schema};
use api::llm_client::GroqClient;
use api::models::{GoalRow, UserGoalInput};
use api::retrieval::{CourseCatalog, EmbeddingClient, PassageStore};
use api::roadmap::generator::{generate_roadmap, save_roadmap_file};
use api::roadmap::handlers::upsert_roadmap;

fn parse_out_dir() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--out-dir" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = parse_out_dir();
    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    let llm = GroqClient::new(config.groq_api_key.clone())?;
    let embedder = Arc::new(EmbeddingClient::new(
        config.embedding_endpoint.clone(),
        config.embedding_model.clone(),
        config.embedding_api_key.clone(),
    )?);
    let passages = PassageStore::load(&config.passages_path, embedder.as_ref()).await?;
    let catalog = CourseCatalog::load(&config.course_catalog_path, embedder.as_ref()).await?;

    let goals = sqlx::query_as::<_, GoalRow>("SELECT * FROM goals ORDER BY created_at")
        .fetch_all(&pool)
        .await?;

    if goals.is_empty() {
        info!("No goals found; nothing to sweep");
        return Ok(());
    }
    info!("Sweeping {} goals", goals.len());

    let mut generated = 0usize;
    let mut failed = 0usize;

    for goal_row in &goals {
        let input = UserGoalInput::from(goal_row);

        let weeks = match generate_roadmap(&llm, &passages, &catalog, embedder.as_ref(), &input).await
        {
            Ok(weeks) => weeks,
            Err(e) => {
                error!("Goal {} ('{}') failed: {e}", goal_row.id, goal_row.goal);
                failed += 1;
                continue;
            }
        };

        let roadmap_json = serde_json::to_value(&weeks)?;
        if let Err(e) = upsert_roadmap(
            &pool,
            goal_row.user_id,
            goal_row.id,
            &goal_row.goal,
            &roadmap_json,
        )
        .await
        {
            error!("Goal {} persist failed: {e}", goal_row.id);
            failed += 1;
            continue;
        }

        if let Some(dir) = &out_dir {
            let path = dir.join(format!("roadmap_{}.json", goal_row.id));
            if let Err(e) = save_roadmap_file(&weeks, &path) {
                error!("Goal {} artifact write failed: {e}", goal_row.id);
            }
        }

        info!(
            "Goal {} ('{}'): {} weeks generated",
            goal_row.id,
            goal_row.goal,
            weeks.len()
        );
        generated += 1;
    }

    info!("Sweep complete: {generated} generated, {failed} failed");
    Ok(())
}
