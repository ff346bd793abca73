use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored learning goal, as created by the user-facing app.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GoalRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub skill_level: String,
    pub time_per_week: i32,
    pub learning_mode: String,
    /// Free text of the form "<N> month(s)". The leading token must parse
    /// as a positive integer; the prompt builder enforces this.
    pub deadline: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted roadmap artifact, one per (user_id, goal_id) pair.
/// Replaced wholesale on regeneration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_id: Uuid,
    pub goal: String,
    pub roadmap: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The generation parameters extracted from a goal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGoalInput {
    pub goal: String,
    pub skill_level: String,
    pub time_per_week: i32,
    pub learning_mode: String,
    pub deadline: String,
}

impl From<&GoalRow> for UserGoalInput {
    fn from(row: &GoalRow) -> Self {
        Self {
            goal: row.goal.clone(),
            skill_level: row.skill_level.clone(),
            time_per_week: row.time_per_week,
            learning_mode: row.learning_mode.clone(),
            deadline: row.deadline.clone(),
        }
    }
}
