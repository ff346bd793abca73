//! Roadmap generation — prompt construction, JSON self-healing, structural
//! validation, resource enrichment, and pipeline orchestration.

pub mod enrich;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod repair;
pub mod validate;
