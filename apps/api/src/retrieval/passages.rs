//! Grounding-passage store — pre-chunked corpus passages embedded at load
//! time, retrieved by cosine similarity to ground the generation prompt.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::retrieval::cosine_similarity;
use crate::retrieval::embedding::{Embedder, EmbeddingError};

/// Number of passages prepended to the generation prompt.
pub const DEFAULT_TOP_K: usize = 4;

#[derive(Debug, Deserialize)]
struct PassageRecord {
    text: String,
}

struct IndexedPassage {
    text: String,
    embedding: Vec<f32>,
}

/// In-memory vector index over corpus passages. Empty when the passages
/// file is missing — generation then runs ungrounded, which is not an
/// error.
pub struct PassageStore {
    passages: Vec<IndexedPassage>,
}

impl PassageStore {
    pub fn empty() -> Self {
        Self { passages: vec![] }
    }

    pub async fn load(
        path: impl AsRef<Path>,
        embedder: &dyn Embedder,
    ) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Passages file {} not readable ({e}); generation runs ungrounded", path.display());
                return Ok(Self::empty());
            }
        };

        let records: Vec<PassageRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Passages file {} is not valid JSON ({e}); generation runs ungrounded", path.display());
                return Ok(Self::empty());
            }
        };

        let texts: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        let passages = texts
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| IndexedPassage { text, embedding })
            .collect::<Vec<_>>();

        info!("Passage store indexed: {} passages", passages.len());
        Ok(Self { passages })
    }

    /// Returns the top-k most similar passages to the query, best first.
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
        embedder: &dyn Embedder,
    ) -> Result<Vec<String>, EmbeddingError> {
        if self.passages.is_empty() || top_k == 0 {
            return Ok(vec![]);
        }

        let query_embedding = embedder.embed(query).await?;

        let mut scored: Vec<(f32, &str)> = self
            .passages
            .iter()
            .map(|p| (cosine_similarity(&query_embedding, &p.embedding), p.text.as_str()))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, text)| text.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubEmbedder {
        vectors: HashMap<String, Vec<f32>>,
    }

    #[async_trait]
    impl Embedder for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Ok(self.vectors.get(text).cloned().unwrap_or(vec![0.0, 0.0]))
        }
    }

    #[tokio::test]
    async fn test_retrieve_orders_best_first() {
        let store = PassageStore {
            passages: vec![
                IndexedPassage {
                    text: "sql basics".to_string(),
                    embedding: vec![0.2, 1.0],
                },
                IndexedPassage {
                    text: "data analytics intro".to_string(),
                    embedding: vec![1.0, 0.0],
                },
            ],
        };
        let embedder = StubEmbedder {
            vectors: HashMap::from([("Data Analytics".to_string(), vec![1.0, 0.1])]),
        };

        let results = store.retrieve("Data Analytics", 2, &embedder).await.unwrap();
        assert_eq!(results[0], "data analytics intro");
        assert_eq!(results[1], "sql basics");
    }

    #[tokio::test]
    async fn test_retrieve_empty_store() {
        let store = PassageStore::empty();
        let embedder = StubEmbedder {
            vectors: HashMap::new(),
        };
        assert!(store.retrieve("q", 3, &embedder).await.unwrap().is_empty());
    }
}
