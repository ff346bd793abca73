//! Prompt construction for roadmap generation.
//!
//! The system block carries the output-schema contract; the user block
//! names the exact required week count and restates the learner profile.
//! Both are pure functions of the goal parameters.

use crate::errors::AppError;
use crate::models::UserGoalInput;

/// System prompt — the fixed JSON rule set the model must follow.
pub const ROADMAP_SYSTEM: &str = r#"You MUST follow these JSON rules:
1. Output ONLY: [{"week":1,"goals":[],"topics":[],"suggested_yt_videos":[]}...]
2. Week numbers must be integers starting at 1
3. All fields must be arrays of strings
4. No nested objects or additional fields
5. YouTube links must be full URLs"#;

/// Derives the target week count from a deadline of the form "<N> month(s)".
/// The leading token must parse as a positive integer; weeks = months * 4.
pub fn weeks_from_deadline(deadline: &str) -> Result<u32, AppError> {
    let months = deadline
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|&m| m > 0)
        .ok_or_else(|| {
            AppError::MalformedInput(format!(
                "deadline must start with a positive month count, got '{deadline}'"
            ))
        })?;

    Ok(months * 4)
}

/// Builds the (system, user) prompt pair for one goal.
pub fn build_prompt(input: &UserGoalInput) -> Result<(String, String), AppError> {
    let num_weeks = weeks_from_deadline(&input.deadline)?;

    let user_prompt = format!(
        r#"Create a {deadline} roadmap for {goal}.
User Profile:
- Level: {skill_level}
- Weekly Hours: {time_per_week}
- Learning Style: {learning_mode}

Generate EXACTLY {num_weeks} weeks following this JSON structure:
[
  {{"week": 1, "goals": ["Learn X", "Practice Y"], "topics": ["Topic A", "Topic B"], "suggested_yt_videos": ["https://youtu.be/..."]}},
  {{"week": 2, "goals": ["Learn X", "Practice Y"], "topics": ["Topic A", "Topic B"], "suggested_yt_videos": ["https://youtu.be/..."]}},
  ...
]
"#,
        deadline = input.deadline,
        goal = input.goal,
        skill_level = input.skill_level,
        time_per_week = input.time_per_week,
        learning_mode = input.learning_mode,
    );

    Ok((ROADMAP_SYSTEM.to_string(), user_prompt))
}

/// Prepends retrieved grounding passages to the user block.
pub fn with_context(user_prompt: &str, passages: &[String]) -> String {
    if passages.is_empty() {
        return user_prompt.to_string();
    }

    let mut grounded = String::from("Use the following reference material where relevant:\n\n");
    for passage in passages {
        grounded.push_str(passage);
        grounded.push_str("\n---\n");
    }
    grounded.push('\n');
    grounded.push_str(user_prompt);
    grounded
}
