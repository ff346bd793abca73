//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{GoalRow, RoadmapRow, UserGoalInput, WeekPlan};
use crate::roadmap::generator::generate_roadmap;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    #[serde(rename = "userID")]
    pub user_id: Uuid,
    pub goal: String,
    pub roadmap: Vec<WeekPlan>,
    pub message: String,
}

/// Loads a goal record, returning 404 when it does not exist. A missing
/// record is a lookup failure, distinct from any pipeline failure.
pub async fn fetch_goal(pool: &PgPool, user_id: Uuid, goal_id: Uuid) -> Result<GoalRow, AppError> {
    sqlx::query_as::<_, GoalRow>("SELECT * FROM goals WHERE user_id = $1 AND id = $2")
        .bind(user_id)
        .bind(goal_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Goal {goal_id} not found for user {user_id}")))
}

/// Atomic update-or-insert by (user_id, goal_id). Returns true when a new
/// row was inserted. `xmax = 0` distinguishes insert from conflict-update.
pub async fn upsert_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    goal_id: Uuid,
    goal: &str,
    roadmap: &Value,
) -> Result<bool, AppError> {
    let inserted: bool = sqlx::query_scalar(
        r#"
        INSERT INTO roadmaps (user_id, goal_id, goal, roadmap)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, goal_id)
        DO UPDATE SET roadmap = EXCLUDED.roadmap, goal = EXCLUDED.goal, updated_at = now()
        RETURNING (xmax = 0)
        "#,
    )
    .bind(user_id)
    .bind(goal_id)
    .bind(goal)
    .bind(roadmap)
    .fetch_one(pool)
    .await?;

    Ok(inserted)
}

/// GET /api/v1/roadmaps/:user_id/:goal_id
///
/// Resolves the stored goal, runs the full generation pipeline, and
/// replaces the persisted roadmap wholesale. Persistence only happens
/// after the repair → validate → enrich chain succeeds.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let goal_row = fetch_goal(&state.db, user_id, goal_id).await?;
    let input = UserGoalInput::from(&goal_row);

    let weeks = generate_roadmap(
        &state.llm,
        &state.passages,
        &state.catalog,
        state.embedder.as_ref(),
        &input,
    )
    .await?;

    let roadmap_json = serde_json::to_value(&weeks)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let inserted = upsert_roadmap(&state.db, user_id, goal_id, &goal_row.goal, &roadmap_json).await?;

    let message = if inserted {
        "Roadmap created successfully."
    } else {
        "Roadmap updated successfully."
    };
    info!("{message} user={user_id} goal={goal_id}");

    Ok(Json(RoadmapResponse {
        user_id,
        goal: goal_row.goal,
        roadmap: weeks,
        message: message.to_string(),
    }))
}

/// GET /api/v1/roadmaps/:user_id/:goal_id/stored
///
/// Returns the persisted roadmap without regenerating.
pub async fn handle_get_stored(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RoadmapRow>, AppError> {
    let row = sqlx::query_as::<_, RoadmapRow>(
        "SELECT * FROM roadmaps WHERE user_id = $1 AND goal_id = $2",
    )
    .bind(user_id)
    .bind(goal_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!("No stored roadmap for user {user_id}, goal {goal_id}"))
    })?;

    Ok(Json(row))
}
