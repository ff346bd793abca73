//! Retrieval-augmented roadmap generation service.
//!
//! Given a learner's stored goal, the service retrieves grounding passages,
//! prompts a hosted completion model for a multi-week plan, self-heals and
//! validates the model's JSON, enriches each week with external learning
//! resources, and persists the result keyed by (user, goal).

pub mod config;
pub mod db;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod retrieval;
pub mod roadmap;
pub mod routes;
pub mod state;
