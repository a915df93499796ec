//! Result shape produced by the extraction pipeline.

use crate::StoryboardScreen;
use serde::{Deserialize, Serialize};

/// Outcome of one extraction call over a block of assistant-reply text.
///
/// The three payload fields are independently optional by design: a
/// validation failure withholds `validated_data` without discarding the
/// already-parsed raw `data`, and `raw_json_strings` is kept for diagnosis
/// even when parsing fails. Created fresh per call; never persisted.
///
/// # Examples
///
/// ```
/// use storyreel_core::ExtractionResult;
///
/// let result = ExtractionResult::failure("No JSON blocks found in the text");
/// assert!(!result.success);
/// assert!(result.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether at least one JSON block was found and parsed
    pub success: bool,
    /// Raw records drawn from every parsed block, in discovery order
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
    /// Screens that passed schema validation; withheld if any record failed
    #[serde(default)]
    pub validated_data: Option<Vec<StoryboardScreen>>,
    /// Diagnostic when `success` is false or validation failed
    #[serde(default)]
    pub error: Option<String>,
    /// Cleaned text of each block that parsed successfully
    #[serde(default)]
    pub raw_json_strings: Option<Vec<String>>,
}

impl ExtractionResult {
    /// A failed extraction carrying only a diagnostic.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// A failed extraction that still reports the candidate strings tried.
    pub fn failure_with_candidates(error: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            raw_json_strings: Some(candidates),
            ..Self::default()
        }
    }
}
