//! Flat story record served to clients and stored on disk.

use crate::ScreenType;
use serde::{Deserialize, Serialize};

/// The flat projection of a validated storyboard screen.
///
/// Wire names (`Screen_title`, `Type`, `Description`, ...) match what the
/// frontend consumes; the original screen fields are retained alongside the
/// projected ones. `image_url` stays unset here; a later stage populates
/// it.
///
/// # Examples
///
/// ```
/// use storyreel_core::{ScreenType, StoryRecord};
///
/// let record = StoryRecord {
///     screen_name: "screen_1".to_string(),
///     screen_title: "Welcome.".to_string(),
///     screen_type: ScreenType::TalkingHead,
///     description: "Welcome.".to_string(),
///     duration: 8.0,
///     notes: String::new(),
///     image_url: None,
///     screen_number: 1,
///     voiceover_text: "Welcome.".to_string(),
///     target_duration_sec: 8.0,
///     on_screen_visual_keywords: None,
///     action_notes: None,
/// };
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["Screen_title"], "Welcome.");
/// assert_eq!(json["screen_name"], "screen_1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Stable screen slug, `screen_{n}`
    pub screen_name: String,
    /// Display title: the voiceover, truncated to 50 characters plus `...`
    #[serde(rename = "Screen_title")]
    pub screen_title: String,
    /// Visual treatment of the screen
    #[serde(rename = "Type")]
    pub screen_type: ScreenType,
    /// Full voiceover text
    #[serde(rename = "Description")]
    pub description: String,
    /// Target duration in seconds
    #[serde(rename = "Duration")]
    pub duration: f64,
    /// Director's notes, empty string when absent
    #[serde(rename = "Notes")]
    pub notes: String,
    /// Illustration URL, populated by a later stage
    #[serde(rename = "ImageUrl")]
    pub image_url: Option<String>,
    /// Original field: display order
    pub screen_number: u32,
    /// Original field: narration text
    pub voiceover_text: String,
    /// Original field: duration in seconds
    pub target_duration_sec: f64,
    /// Original field: visual keywords
    pub on_screen_visual_keywords: Option<String>,
    /// Original field: director's notes
    pub action_notes: Option<String>,
}
