//! Resource enrichment — deterministic link derivation for a validated
//! roadmap. Pure with respect to (topics, goal, skill level); the curated
//! course list is computed once per roadmap by the caller and attached
//! uniformly to every week.

use crate::models::{CuratedCourse, WeekPlan};

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";
const UDEMY_SEARCH_URL: &str = "https://www.udemy.com/courses/search/?q=";
const COURSERA_SEARCH_URL: &str = "https://www.coursera.org/search?query=";
const LINKEDIN_LEARNING_URL: &str = "https://www.linkedin.com/learning/search?keywords=";
const EDX_SEARCH_URL: &str = "https://www.edx.org/search?q=";

/// Known certificate tracks with dedicated Google Career Certificate pages.
const GOOGLE_CERTIFICATES: [(&str, &str); 4] = [
    (
        "IT Support",
        "https://grow.google/certificates/it-support/?utm_campaign=default&utm_medium=sem&utm_source=google",
    ),
    (
        "Data Analytics",
        "https://grow.google/certificates/data-analytics/?utm_campaign=default&utm_medium=sem&utm_source=google",
    ),
    (
        "Project Management",
        "https://grow.google/certificates/project-management/?utm_campaign=default&utm_medium=sem&utm_source=google",
    ),
    (
        "UX Design",
        "https://grow.google/certificates/ux-design/?utm_campaign=default&utm_medium=sem&utm_source=google",
    ),
];

/// Sentinel returned when no exact certificate track matches the goal.
/// Deliberately a value, not an error.
pub const GOOGLE_CERTIFICATE_NOT_FOUND: &str =
    "No Google Career Certificate found for this goal.";

fn search_query(text: &str) -> String {
    text.replace(' ', "+")
}

/// One YouTube search URL per topic, query "<topic> tutorial".
pub fn youtube_links(topics: &[String]) -> Vec<String> {
    topics
        .iter()
        .map(|topic| format!("{YOUTUBE_SEARCH_URL}{}", search_query(&format!("{topic} tutorial"))))
        .collect()
}

/// Udemy course search for "<goal> <skill_level> course".
pub fn udemy_link(goal: &str, skill_level: &str) -> String {
    format!("{UDEMY_SEARCH_URL}{}", search_query(&format!("{goal} {skill_level} course")))
}

/// Coursera search for "<goal> professional certificate".
pub fn coursera_certificates_link(goal: &str) -> String {
    format!("{COURSERA_SEARCH_URL}{}", search_query(&format!("{goal} professional certificate")))
}

/// LinkedIn Learning search for "<goal> certification".
pub fn linkedin_learning_link(goal: &str) -> String {
    format!("{LINKEDIN_LEARNING_URL}{}", search_query(&format!("{goal} certification")))
}

/// Exact-match lookup against the known Google Career Certificate tracks,
/// falling back to [`GOOGLE_CERTIFICATE_NOT_FOUND`].
pub fn google_certificates_link(goal: &str) -> String {
    GOOGLE_CERTIFICATES
        .iter()
        .find(|(track, _)| *track == goal)
        .map(|(_, url)| (*url).to_string())
        .unwrap_or_else(|| GOOGLE_CERTIFICATE_NOT_FOUND.to_string())
}

/// edX search for "<goal> certification".
pub fn edx_certificates_link(goal: &str) -> String {
    format!("{EDX_SEARCH_URL}{}", search_query(&format!("{goal} certification")))
}

/// Enriches every week in place. `suggested_yt_videos` is always recomputed
/// from the week's topics — whatever the model supplied is discarded.
pub fn enrich_roadmap(
    weeks: &mut [WeekPlan],
    goal: &str,
    skill_level: &str,
    curated: &[CuratedCourse],
) {
    for week in weeks {
        week.suggested_yt_videos = youtube_links(&week.topics);
        week.suggested_udemy_course = Some(udemy_link(goal, skill_level));
        week.suggested_coursera_course = Some(coursera_certificates_link(goal));
        week.suggested_linkedin_learning = Some(linkedin_learning_link(goal));
        week.suggested_google_certificate = Some(google_certificates_link(goal));
        week.suggested_edx_certificate = Some(edx_certificates_link(goal));
        week.suggested_nptel_certifications = if curated.is_empty() {
            None
        } else {
            Some(curated.to_vec())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(topics: &[&str], stale_videos: &[&str]) -> WeekPlan {
        WeekPlan {
            week: 1,
            goals: vec!["learn".to_string()],
            topics: topics.iter().map(|s| s.to_string()).collect(),
            suggested_yt_videos: stale_videos.iter().map(|s| s.to_string()).collect(),
            suggested_udemy_course: None,
            suggested_coursera_course: None,
            suggested_linkedin_learning: None,
            suggested_google_certificate: None,
            suggested_edx_certificate: None,
            suggested_nptel_certifications: None,
        }
    }

    #[test]
    fn test_youtube_links_one_per_topic() {
        let links = youtube_links(&["SQL Joins".to_string(), "Pandas".to_string()]);
        assert_eq!(
            links,
            vec![
                "https://www.youtube.com/results?search_query=SQL+Joins+tutorial",
                "https://www.youtube.com/results?search_query=Pandas+tutorial",
            ]
        );
    }

    #[test]
    fn test_udemy_link_format() {
        assert_eq!(
            udemy_link("Data Analytics", "beginner"),
            "https://www.udemy.com/courses/search/?q=Data+Analytics+beginner+course"
        );
    }

    #[test]
    fn test_coursera_certificates_link() {
        assert_eq!(
            coursera_certificates_link("Data Analytics"),
            "https://www.coursera.org/search?query=Data+Analytics+professional+certificate"
        );
    }

    #[test]
    fn test_linkedin_learning_link() {
        assert_eq!(
            linkedin_learning_link("UX Design"),
            "https://www.linkedin.com/learning/search?keywords=UX+Design+certification"
        );
    }

    #[test]
    fn test_edx_certificates_link() {
        assert_eq!(
            edx_certificates_link("Cloud Computing"),
            "https://www.edx.org/search?q=Cloud+Computing+certification"
        );
    }

    #[test]
    fn test_google_certificate_exact_match() {
        assert!(google_certificates_link("Data Analytics").contains("grow.google/certificates/data-analytics"));
    }

    #[test]
    fn test_google_certificate_sentinel_on_miss() {
        assert_eq!(
            google_certificates_link("Quantum Basket Weaving"),
            GOOGLE_CERTIFICATE_NOT_FOUND
        );
    }

    #[test]
    fn test_google_certificate_no_fuzzy_match() {
        // lookup is exact, not substring
        assert_eq!(
            google_certificates_link("data analytics"),
            GOOGLE_CERTIFICATE_NOT_FOUND
        );
    }

    #[test]
    fn test_enrich_overwrites_stale_videos() {
        let mut weeks = vec![week(&["X"], &["stale"])];
        enrich_roadmap(&mut weeks, "Data Analytics", "beginner", &[]);
        assert_eq!(
            weeks[0].suggested_yt_videos,
            vec!["https://www.youtube.com/results?search_query=X+tutorial"]
        );
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let make = || {
            let mut weeks = vec![week(&["SQL", "Excel"], &[])];
            enrich_roadmap(&mut weeks, "Data Analytics", "beginner", &[]);
            serde_json::to_string(&weeks).unwrap()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_enrich_attaches_curated_courses_uniformly() {
        let curated = vec![CuratedCourse {
            name: "Data Science for Engineers".to_string(),
            institute: "IIT Madras".to_string(),
            duration: "8 weeks".to_string(),
            url: "https://nptel.ac.in/courses/106106179".to_string(),
        }];
        let mut weeks = vec![week(&["a"], &[]), week(&["b"], &[])];
        enrich_roadmap(&mut weeks, "Data Science", "intermediate", &curated);
        assert_eq!(weeks[0].suggested_nptel_certifications, Some(curated.clone()));
        assert_eq!(weeks[1].suggested_nptel_certifications, Some(curated));
    }

    #[test]
    fn test_enrich_fills_all_link_fields() {
        let mut weeks = vec![week(&["a"], &[])];
        enrich_roadmap(&mut weeks, "IT Support", "beginner", &[]);
        let w = &weeks[0];
        assert!(w.suggested_udemy_course.is_some());
        assert!(w.suggested_coursera_course.is_some());
        assert!(w.suggested_linkedin_learning.is_some());
        assert!(w.suggested_edx_certificate.is_some());
        assert!(w
            .suggested_google_certificate
            .as_deref()
            .unwrap()
            .contains("it-support"));
    }
}
