//! Projection of validated screens into flat story records.

use storyreel_core::{StoryRecord, StoryboardScreen};

/// Longest title served to clients before truncation kicks in.
const TITLE_MAX_CHARS: usize = 50;

/// Project a validated screen into the flat story record shape.
///
/// Pure projection: the title is the voiceover truncated to
/// [`TITLE_MAX_CHARS`] characters plus `...` when longer, `notes` falls
/// back to an empty string, `image_url` is left unset for a later stage,
/// and the original screen fields are retained alongside the projected
/// ones.
///
/// # Examples
///
/// ```
/// use storyreel_core::{ScreenType, StoryboardScreen};
/// use storyreel_extract::format_story;
///
/// let screen = StoryboardScreen {
///     screen_number: 1,
///     voiceover_text: "Welcome aboard.".to_string(),
///     target_duration_sec: 8.0,
///     screen_type: ScreenType::TalkingHead,
///     on_screen_visual_keywords: None,
///     action_notes: None,
///     extra: serde_json::Map::new(),
/// };
///
/// let record = format_story(&screen);
/// assert_eq!(record.screen_name, "screen_1");
/// assert_eq!(record.description, "Welcome aboard.");
/// assert!(record.image_url.is_none());
/// ```
pub fn format_story(screen: &StoryboardScreen) -> StoryRecord {
    StoryRecord {
        screen_name: format!("screen_{}", screen.screen_number),
        screen_title: truncate_title(&screen.voiceover_text),
        screen_type: screen.screen_type,
        description: screen.voiceover_text.clone(),
        duration: screen.target_duration_sec,
        notes: screen.action_notes.clone().unwrap_or_default(),
        image_url: None,
        screen_number: screen.screen_number,
        voiceover_text: screen.voiceover_text.clone(),
        target_duration_sec: screen.target_duration_sec,
        on_screen_visual_keywords: screen.on_screen_visual_keywords.clone(),
        action_notes: screen.action_notes.clone(),
    }
}

/// Project a whole batch, preserving order.
pub fn format_stories(screens: &[StoryboardScreen]) -> Vec<StoryRecord> {
    screens.iter().map(format_story).collect()
}

fn truncate_title(voiceover: &str) -> String {
    if voiceover.chars().count() > TITLE_MAX_CHARS {
        let head: String = voiceover.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        voiceover.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::ScreenType;

    fn screen(voiceover: &str) -> StoryboardScreen {
        StoryboardScreen {
            screen_number: 1,
            voiceover_text: voiceover.to_string(),
            target_duration_sec: 8.0,
            screen_type: ScreenType::StockVideo,
            on_screen_visual_keywords: Some("test keywords".to_string()),
            action_notes: Some("test notes".to_string()),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn short_voiceover_becomes_the_title_unchanged() {
        let voiceover = "Forty characters of narration, exactly.!";
        assert_eq!(voiceover.chars().count(), 40);

        let record = format_story(&screen(voiceover));
        assert_eq!(record.screen_title, voiceover);
    }

    #[test]
    fn long_voiceover_is_truncated_with_ellipsis() {
        let voiceover = "x".repeat(90);
        let record = format_story(&screen(&voiceover));

        assert_eq!(record.screen_title.chars().count(), 53);
        assert!(record.screen_title.ends_with("..."));
    }

    #[test]
    fn description_round_trips_the_voiceover_exactly() {
        let voiceover = "The messaging industry is buzzing with new tools.";
        let record = format_story(&screen(voiceover));
        assert_eq!(record.description, voiceover);
        assert_eq!(record.voiceover_text, voiceover);
    }

    #[test]
    fn projected_and_original_fields_agree() {
        let record = format_story(&screen("Test voiceover"));

        assert_eq!(record.screen_name, "screen_1");
        assert_eq!(record.screen_type, ScreenType::StockVideo);
        assert_eq!(record.duration, 8.0);
        assert_eq!(record.notes, "test notes");
        assert_eq!(record.screen_number, 1);
        assert!(record.image_url.is_none());
    }

    #[test]
    fn missing_notes_become_empty_string() {
        let mut s = screen("Test");
        s.action_notes = None;
        let record = format_story(&s);
        assert_eq!(record.notes, "");
        assert!(record.action_notes.is_none());
    }

    #[test]
    fn batch_formatting_preserves_order() {
        let mut first = screen("First");
        first.screen_number = 1;
        let mut second = screen("Second");
        second.screen_number = 2;

        let records = format_stories(&[first, second]);
        assert_eq!(records[0].screen_name, "screen_1");
        assert_eq!(records[1].screen_name, "screen_2");
    }
}
