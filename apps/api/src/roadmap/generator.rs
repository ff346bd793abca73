//! Roadmap generation — orchestrates the full pipeline.
//!
//! Flow: build prompt → retrieve grounding passages → completion call →
//!       self-heal JSON → parse → validate → curated course lookup →
//!       enrich. Any stage failure aborts the whole generation; nothing
//!       partial ever reaches the caller or the store.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{extract_result, GroqClient};
use crate::models::{UserGoalInput, WeekPlan};
use crate::retrieval::catalog::DEFAULT_TOP_K as CATALOG_TOP_K;
use crate::retrieval::passages::DEFAULT_TOP_K as PASSAGE_TOP_K;
use crate::retrieval::{CourseCatalog, Embedder, PassageStore};
use crate::roadmap::enrich::enrich_roadmap;
use crate::roadmap::prompts::{build_prompt, with_context};
use crate::roadmap::repair::self_healing_json;
use crate::roadmap::validate::parse_weeks;

/// Repairs, parses, and validates a raw completion into typed week plans.
/// Pure with respect to its input; shared by the service and batch paths.
pub fn coerce_roadmap(raw: &str) -> Result<Vec<WeekPlan>, AppError> {
    let json_str = self_healing_json(raw);

    let parsed: Value = serde_json::from_str(&json_str).map_err(|source| {
        AppError::RepairExhausted {
            source,
            attempted: json_str.clone(),
        }
    })?;

    parse_weeks(parsed)
}

/// Runs the full generation pipeline for one goal.
pub async fn generate_roadmap(
    llm: &GroqClient,
    passages: &PassageStore,
    catalog: &CourseCatalog,
    embedder: &dyn Embedder,
    input: &UserGoalInput,
) -> Result<Vec<WeekPlan>, AppError> {
    let (system, user_prompt) = build_prompt(input)?;

    let context = passages
        .retrieve(&input.goal, PASSAGE_TOP_K, embedder)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("retrieval failed")))?;
    let grounded_prompt = with_context(&user_prompt, &context);

    info!(
        "Generating roadmap for '{}' ({} grounding passages)",
        input.goal,
        context.len()
    );
    let raw = llm.call(&system, &grounded_prompt).await?;

    // The completion may arrive wrapped in a response envelope rather than
    // as the bare answer; unwrap it before repair.
    let text = match serde_json::from_str::<Value>(&raw) {
        Ok(envelope @ Value::Object(_)) => extract_result(&envelope),
        _ => raw,
    };

    let mut weeks = coerce_roadmap(&text)?;
    info!("Roadmap validated: {} weeks", weeks.len());

    // Curated enrichment is optional; a lookup failure downgrades to a
    // warning rather than discarding an otherwise valid roadmap.
    let curated = match catalog.search(&input.goal, CATALOG_TOP_K, embedder).await {
        Ok(curated) => curated,
        Err(e) => {
            warn!("Curated course lookup failed: {e}");
            vec![]
        }
    };

    enrich_roadmap(&mut weeks, &input.goal, &input.skill_level, &curated);
    Ok(weeks)
}

/// Writes the enriched roadmap as pretty-printed JSON for offline
/// workflows.
pub fn save_roadmap_file(weeks: &[WeekPlan], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let pretty = serde_json::to_string_pretty(weeks)?;
    std::fs::write(path, pretty)
        .with_context(|| format!("Failed to write roadmap to {}", path.display()))?;
    info!("Roadmap saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::enrich::GOOGLE_CERTIFICATE_NOT_FOUND;

    #[test]
    fn test_coerce_repairs_trailing_comma_and_missing_bracket() {
        // well-formed except a trailing comma and one missing closer
        let raw = r#"[
            {"week": 1, "goals": ["Install tooling"], "topics": ["Spreadsheets"], "suggested_yt_videos": ["https://youtu.be/a"]},
            {"week": 2, "goals": ["Practice SQL"], "topics": ["SQL Basics"], "suggested_yt_videos": ["https://youtu.be/b"],}
        "#;
        let weeks = coerce_roadmap(raw).unwrap();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[1].week, 2);
    }

    #[test]
    fn test_coerce_rejects_unrepairable_text() {
        let err = coerce_roadmap("I cannot produce a roadmap right now.").unwrap_err();
        assert!(matches!(err, AppError::RepairExhausted { .. }));
    }

    #[test]
    fn test_coerce_rejects_schema_violation() {
        let err = coerce_roadmap(r#"[{"week": "one", "goals": [], "topics": [], "suggested_yt_videos": []}]"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_data_analytics_end_to_end() {
        // eight-week completion with a trailing comma and a missing final
        // bracket, as the completion service commonly truncates
        let mut raw = String::from("[\n");
        for week in 1..=8 {
            let trailing = if week == 8 { "," } else { "" };
            let separator = if week == 8 { "" } else { "," };
            raw.push_str(&format!(
                r#"{{"week": {week}, "goals": ["Goal {week}"], "topics": ["Topic {week}"], "suggested_yt_videos": ["stale"{trailing}]}}{separator}"#
            ));
            raw.push('\n');
        }
        // trailing comma inside week 8 and no closing bracket at the end
        let mut weeks = coerce_roadmap(&raw).unwrap();
        assert_eq!(weeks.len(), 8);

        enrich_roadmap(&mut weeks, "Data Analytics", "beginner", &[]);
        for week in &weeks {
            let cert = week.suggested_google_certificate.as_deref().unwrap();
            assert!(cert.contains("data-analytics"), "expected exact-match certificate, got {cert}");
            assert_ne!(cert, GOOGLE_CERTIFICATE_NOT_FOUND);
            assert_eq!(week.suggested_yt_videos.len(), 1);
            assert!(week.suggested_yt_videos[0].contains("+tutorial"));
            assert!(!week.suggested_yt_videos.contains(&"stale".to_string()));
        }
    }

    #[test]
    fn test_save_roadmap_file_pretty_prints() {
        let weeks = coerce_roadmap(
            r#"[{"week": 1, "goals": ["g"], "topics": ["t"], "suggested_yt_videos": ["v"]}]"#,
        )
        .unwrap();
        let path = std::env::temp_dir().join("roadmap_test_artifact.json");
        save_roadmap_file(&weeks, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(written.contains("\n  ")); // indented output
        let round: Vec<WeekPlan> = serde_json::from_str(&written).unwrap();
        assert_eq!(round, weeks);
    }
}
