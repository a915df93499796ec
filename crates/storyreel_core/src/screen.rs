//! Storyboard screen types.

use serde::{Deserialize, Serialize};

/// Visual treatment of a storyboard screen.
///
/// Raw AI output uses free-form synonyms ("slides/text overlay",
/// "stock video", ...); the extraction pipeline normalizes those onto this
/// enumeration before validation.
///
/// # Examples
///
/// ```
/// use storyreel_core::ScreenType;
///
/// assert_eq!(format!("{}", ScreenType::StockVideo), "stock-video");
/// assert_eq!("cta".parse::<ScreenType>().unwrap(), ScreenType::Cta);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenType {
    /// Full-screen text slides or overlaid captions
    #[display("text-overlay")]
    TextOverlay,
    /// Licensed stock footage
    #[display("stock-video")]
    StockVideo,
    /// Narrator on camera
    #[display("talking-head")]
    TalkingHead,
    /// Screen recording of a product or UI
    #[display("screencast")]
    Screencast,
    /// Call-to-action card
    #[display("cta")]
    Cta,
}

impl ScreenType {
    /// Canonical string form, as stored on disk and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenType::TextOverlay => "text-overlay",
            ScreenType::StockVideo => "stock-video",
            ScreenType::TalkingHead => "talking-head",
            ScreenType::Screencast => "screencast",
            ScreenType::Cta => "cta",
        }
    }
}

impl std::str::FromStr for ScreenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text-overlay" => Ok(ScreenType::TextOverlay),
            "stock-video" => Ok(ScreenType::StockVideo),
            "talking-head" => Ok(ScreenType::TalkingHead),
            "screencast" => Ok(ScreenType::Screencast),
            "cta" => Ok(ScreenType::Cta),
            _ => Err(format!("Unknown screen type: {}", s)),
        }
    }
}

/// One shot/segment of a storyboard, with narration, duration, and visual
/// type.
///
/// Unknown fields from the source record are preserved in `extra` rather
/// than rejected, so schema drift in AI output never loses data.
///
/// # Examples
///
/// ```
/// use storyreel_core::{ScreenType, StoryboardScreen};
///
/// let screen: StoryboardScreen = serde_json::from_str(
///     r#"{
///         "screen_number": 1,
///         "voiceover_text": "Welcome.",
///         "target_duration_sec": 8,
///         "screen_type": "talking-head",
///         "mood": "upbeat"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(screen.screen_type, ScreenType::TalkingHead);
/// assert_eq!(screen.extra["mood"], "upbeat");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryboardScreen {
    /// Position of the screen within the storyboard (1-based display order)
    pub screen_number: u32,
    /// Spoken narration for the screen
    pub voiceover_text: String,
    /// Target duration in seconds (integer or fractional)
    pub target_duration_sec: f64,
    /// Visual treatment, normalized onto [`ScreenType`]
    pub screen_type: ScreenType,
    /// Keywords describing the on-screen visuals
    #[serde(default)]
    pub on_screen_visual_keywords: Option<String>,
    /// Director's notes for the screen
    #[serde(default)]
    pub action_notes: Option<String>,
    /// Extra fields from the source record, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
