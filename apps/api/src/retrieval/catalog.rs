//! Curated course catalog — a static JSON file embedded at load time and
//! searched by cosine similarity against the learner's goal.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::models::CuratedCourse;
use crate::retrieval::cosine_similarity;
use crate::retrieval::embedding::{Embedder, EmbeddingError};

/// Default number of curated courses attached per roadmap.
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "Discipline")]
    discipline: String,
    #[serde(rename = "Course Name")]
    course_name: String,
    #[serde(rename = "Institute")]
    institute: String,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "NPTEL URL")]
    url: String,
}

struct IndexedCourse {
    course: CuratedCourse,
    embedding: Vec<f32>,
}

/// In-memory vector index over the static course catalog.
/// Empty when the catalog file is missing or unreadable — curated
/// enrichment is optional, never fatal.
pub struct CourseCatalog {
    courses: Vec<IndexedCourse>,
}

impl CourseCatalog {
    pub fn empty() -> Self {
        Self { courses: vec![] }
    }

    /// Loads the catalog file and embeds one description per record
    /// ("<discipline> <course name>").
    pub async fn load(
        path: impl AsRef<Path>,
        embedder: &dyn Embedder,
    ) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Course catalog {} not readable ({e}); curated enrichment disabled", path.display());
                return Ok(Self::empty());
            }
        };

        let records: Vec<CatalogRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Course catalog {} is not valid JSON ({e}); curated enrichment disabled", path.display());
                return Ok(Self::empty());
            }
        };

        let descriptions: Vec<String> = records
            .iter()
            .map(|r| format!("{} {}", r.discipline, r.course_name))
            .collect();
        let embeddings = embedder.embed_batch(&descriptions).await?;

        let courses = records
            .into_iter()
            .zip(embeddings)
            .map(|(r, embedding)| IndexedCourse {
                course: CuratedCourse {
                    name: r.course_name,
                    institute: r.institute,
                    duration: r.duration,
                    url: r.url,
                },
                embedding,
            })
            .collect::<Vec<_>>();

        info!("Course catalog indexed: {} courses", courses.len());
        Ok(Self { courses })
    }

    /// Top-k courses by cosine similarity to the goal text. Ties keep
    /// catalog order (the sort is stable); order beyond that is
    /// unspecified.
    pub async fn search(
        &self,
        goal: &str,
        top_k: usize,
        embedder: &dyn Embedder,
    ) -> Result<Vec<CuratedCourse>, EmbeddingError> {
        if self.courses.is_empty() || top_k == 0 {
            return Ok(vec![]);
        }

        let query = embedder.embed(goal).await?;

        let mut scored: Vec<(f32, &CuratedCourse)> = self
            .courses
            .iter()
            .map(|c| (cosine_similarity(&query, &c.embedding), &c.course))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, course)| course.clone())
            .collect())
    }
}
