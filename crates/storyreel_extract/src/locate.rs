//! Candidate JSON block location.
//!
//! Three strategies are tried in priority order; the first one that yields
//! at least one candidate wins and later strategies are not consulted:
//!
//! 1. Fenced markdown code blocks (optionally tagged `json`).
//! 2. Bracketed arrays-of-objects embedded in prose.
//! 3. The whole text, cleaned, as a last resort.
//!
//! Every raw match passes through [`clean_json_candidate`] before it is
//! returned, so callers always see fence-free, prose-free candidates.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)```(?:json)?\s*\n?(.*?)\n?```").expect("valid fenced block regex")
});

static ARRAY_IN_PROSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("valid prose array regex"));

/// Locate candidate JSON substrings in free-form assistant text.
///
/// Returns zero or more cleaned candidates in discovery order. Never
/// panics; text with no JSON-like content yields an empty vector.
///
/// # Examples
///
/// ```
/// use storyreel_extract::locate_json_blocks;
///
/// let blocks = locate_json_blocks(r#"Here: [{"screen_number": 1}] - done"#);
/// assert_eq!(blocks, vec![r#"[{"screen_number": 1}]"#.to_string()]);
///
/// assert!(locate_json_blocks("no structured data here").is_empty());
/// ```
pub fn locate_json_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();

    // Strategy 1: fenced markdown code blocks.
    for cap in FENCED_BLOCK.captures_iter(text) {
        let cleaned = clean_json_candidate(&cap[1]);
        if cleaned.starts_with('[') || cleaned.starts_with('{') {
            blocks.push(cleaned);
        }
    }

    // Strategy 2: arrays of objects embedded in prose.
    if blocks.is_empty() {
        for found in ARRAY_IN_PROSE.find_iter(text) {
            blocks.push(clean_json_candidate(found.as_str()));
        }
    }

    // Strategy 3: the entire text, cleaned.
    if blocks.is_empty() {
        let cleaned = clean_json_candidate(text);
        if cleaned.starts_with('[') || cleaned.starts_with('{') {
            blocks.push(cleaned);
        }
    }

    blocks
}

/// Clean a raw candidate before parsing.
///
/// Trims whitespace, strips a leading and a trailing fence marker line, and
/// drops any prose after the first balanced close of a JSON array. If no
/// balanced close is found the trimmed text is returned unchanged.
///
/// # Examples
///
/// ```
/// use storyreel_extract::clean_json_candidate;
///
/// let raw = "```json\n[{\"a\":1}]\n```\n**Total: 1**";
/// assert_eq!(clean_json_candidate(raw), r#"[{"a":1}]"#);
/// ```
pub fn clean_json_candidate(candidate: &str) -> String {
    let mut text = candidate.trim();

    if let Some(rest) = strip_leading_fence(text) {
        text = rest;
    }
    if let Some(rest) = strip_trailing_fence(text) {
        text = rest;
    }

    match truncate_after_array(text) {
        Some(truncated) => truncated.to_string(),
        None => text.to_string(),
    }
}

/// Drop a leading fence marker line, with or without a language tag.
fn strip_leading_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    match rest.find('\n') {
        Some(newline) => Some(rest[newline + 1..].trim_start()),
        // The fence line was the whole candidate.
        None => Some(""),
    }
}

/// Drop a trailing fence marker line.
fn strip_trailing_fence(text: &str) -> Option<&str> {
    let rest = text.trim_end().strip_suffix("```")?;
    Some(rest.trim_end())
}

/// Truncate right after the first point the `[`/`]` depth counter returns to
/// zero having gone positive, dropping trailing prose.
fn truncate_after_array(text: &str) -> Option<&str> {
    let mut depth: i64 = 0;
    let mut opened = false;

    for (index, ch) in text.char_indices() {
        match ch {
            '[' => {
                depth += 1;
                opened = true;
            }
            ']' => {
                depth -= 1;
                if opened && depth == 0 {
                    return Some(&text[..index + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
