//! JSON self-healing — a small, explicitly ordered list of pure text
//! transforms that maximize the chance a model response parses as JSON.
//!
//! This is deliberately NOT a tolerant JSON parser. Each rule targets a
//! defect class actually observed from the completion service: markdown
//! code fences, trailing commas before a closer, and truncated output
//! missing closing braces/brackets. The function is total and idempotent;
//! in the worst case it returns the trimmed input unchanged and parsing
//! fails downstream.

/// Applies the repair rules in order:
/// 1. trim surrounding whitespace;
/// 2. strip markdown code fences;
/// 3. remove every comma whose next non-whitespace character is `]` or `}`;
/// 4. append `}` until `{`/`}` counts balance;
/// 5. append `]` until `[`/`]` counts balance.
///
/// Object balancing runs before array balancing because the schema places
/// the top-level array outside all objects, so trailing unbalanced braces
/// must close first. Excess closers are never removed.
pub fn self_healing_json(raw: &str) -> String {
    let trimmed = strip_fences(raw.trim());
    let mut json_str = strip_trailing_commas(trimmed);

    let open_braces = json_str.matches('{').count();
    let close_braces = json_str.matches('}').count();
    if open_braces > close_braces {
        json_str.push_str(&"}".repeat(open_braces - close_braces));
    }

    let open_brackets = json_str.matches('[').count();
    let close_brackets = json_str.matches(']').count();
    if open_brackets > close_brackets {
        json_str.push_str(&"]".repeat(open_brackets - close_brackets));
    }

    json_str
}

/// Strips ```json ... ``` or ``` ... ``` code fences.
fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}

/// Removes every comma that immediately precedes (modulo whitespace) a
/// closing `]` or `}`, at any nesting depth. The whitespace run between
/// the comma and the closer is dropped with it.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == ']' || chars[j] == '}') {
                i += 1; // drop the comma; the whitespace run goes with it
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
