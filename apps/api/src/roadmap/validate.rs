//! Structural validation of the repaired, parsed model output.
//!
//! Validation is a gate, not a transform: the first rule violation is
//! reported and nothing is coerced. Element types inside the list fields
//! are not checked, and week contiguity / requested count are deliberately
//! not enforced.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::WeekPlan;

const REQUIRED_KEYS: [&str; 4] = ["week", "goals", "topics", "suggested_yt_videos"];
const LIST_KEYS: [&str; 3] = ["goals", "topics", "suggested_yt_videos"];

/// Asserts the parsed value is an array of week objects with the required
/// typed fields. Returns the first violation found.
pub fn validate_structure(data: &Value) -> Result<(), AppError> {
    let entries = data.as_array().ok_or_else(|| {
        AppError::Validation("Root element must be an array (list of weeks).".to_string())
    })?;

    for entry in entries {
        let object = entry.as_object().ok_or_else(|| {
            AppError::Validation("Each week entry must be an object.".to_string())
        })?;

        for key in REQUIRED_KEYS {
            if !object.contains_key(key) {
                return Err(AppError::Validation(format!(
                    "Missing required keys in entry: {entry}"
                )));
            }
        }

        let week = &object["week"];
        if !week.is_i64() && !week.is_u64() {
            return Err(AppError::Validation(format!(
                "Invalid week format: {week}, expected integer."
            )));
        }

        for key in LIST_KEYS {
            if !object[key].is_array() {
                return Err(AppError::Validation(format!(
                    "Invalid format for lists in entry: {entry}"
                )));
            }
        }
    }

    Ok(())
}

/// Validates and deserializes in one step. Infallible deserialization is
/// not assumed — a list field may hold non-string elements the validator
/// passes through, so serde failures map to the same error class.
pub fn parse_weeks(data: Value) -> Result<Vec<WeekPlan>, AppError> {
    validate_structure(&data)?;
    serde_json::from_value(data)
        .map_err(|e| AppError::Validation(format!("Roadmap deserialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_week() -> Value {
        json!({"week": 1, "goals": ["a"], "topics": ["b"], "suggested_yt_videos": ["c"]})
    }

    #[test]
    fn test_accepts_minimal_valid_instance() {
        assert!(validate_structure(&json!([minimal_week()])).is_ok());
    }

    #[test]
    fn test_accepts_empty_array() {
        assert!(validate_structure(&json!([])).is_ok());
    }

    #[test]
    fn test_rejects_non_array_root() {
        let err = validate_structure(&minimal_week()).unwrap_err();
        assert!(err.to_string().contains("Root element must be an array"));
    }

    #[test]
    fn test_rejects_non_object_element() {
        let err = validate_structure(&json!([minimal_week(), "week two"])).unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn test_rejects_missing_required_key() {
        for key in ["week", "goals", "topics", "suggested_yt_videos"] {
            let mut week = minimal_week();
            week.as_object_mut().unwrap().remove(key);
            let err = validate_structure(&json!([week])).unwrap_err();
            assert!(
                err.to_string().contains("Missing required keys"),
                "missing '{key}' not caught"
            );
        }
    }

    #[test]
    fn test_rejects_string_week() {
        let mut week = minimal_week();
        week["week"] = json!("1");
        let err = validate_structure(&json!([week])).unwrap_err();
        assert!(err.to_string().contains("Invalid week format"));
    }

    #[test]
    fn test_rejects_float_week() {
        let mut week = minimal_week();
        week["week"] = json!(1.5);
        assert!(validate_structure(&json!([week])).is_err());
    }

    #[test]
    fn test_rejects_non_array_list_field() {
        for key in ["goals", "topics", "suggested_yt_videos"] {
            let mut week = minimal_week();
            week[key] = json!("not a list");
            let err = validate_structure(&json!([week])).unwrap_err();
            assert!(
                err.to_string().contains("Invalid format for lists"),
                "non-array '{key}' not caught"
            );
        }
    }

    #[test]
    fn test_week_contiguity_not_enforced() {
        let mut w1 = minimal_week();
        let mut w2 = minimal_week();
        w1["week"] = json!(3);
        w2["week"] = json!(7);
        assert!(validate_structure(&json!([w1, w2])).is_ok());
    }

    #[test]
    fn test_parse_weeks_yields_typed_plans() {
        let weeks = parse_weeks(json!([minimal_week()])).unwrap();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].week, 1);
        assert_eq!(weeks[0].topics, vec!["b"]);
        assert!(weeks[0].suggested_udemy_course.is_none());
    }

    #[test]
    fn test_parse_weeks_propagates_gate_failure() {
        assert!(parse_weeks(json!({"week": 1})).is_err());
    }
}
