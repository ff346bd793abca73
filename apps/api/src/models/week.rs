use serde::{Deserialize, Serialize};

/// One week of a generated roadmap — the canonical unit.
///
/// The first four fields are the model's required output; the validator
/// gates on them before deserialization. The `suggested_*` link fields are
/// filled by the enricher and never expected from the model
/// (`suggested_yt_videos` is overwritten even when the model supplies it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Any JSON integer is accepted; contiguity and count are deliberately
    /// not enforced.
    pub week: i64,
    pub goals: Vec<String>,
    pub topics: Vec<String>,
    pub suggested_yt_videos: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_udemy_course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_coursera_course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_linkedin_learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_google_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_edx_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_nptel_certifications: Option<Vec<CuratedCourse>>,
}

/// A curated course record from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedCourse {
    #[serde(rename = "Course Name")]
    pub name: String,
    #[serde(rename = "Institute")]
    pub institute: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "NPTEL URL")]
    pub url: String,
}
