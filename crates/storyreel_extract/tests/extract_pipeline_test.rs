//! End-to-end tests for the extraction pipeline.

use storyreel_core::ScreenType;
use storyreel_extract::{extract_storyboard, format_stories};

/// The kind of reply the assistant actually produces: prose, a fenced
/// block, and a trailing summary.
const TWO_SCREEN_REPLY: &str = r#"Here's your storyboard:

```json
[
  {
    "screen_number": 1,
    "voiceover_text": "The messaging industry is buzzing - brands just got a powerful new tool to boost engagement and expand brand equity.",
    "target_duration_sec": 8,
    "screen_type": "slides/text overlay",
    "on_screen_visual_keywords": "animated buzzwords, brand logos, dynamic background",
    "action_notes": "Fast-paced intro animation, bold text overlays"
  },
  {
    "screen_number": 2,
    "voiceover_text": "In a world where every business is fighting for attention, traditional SMS just isn't enough to build trust.",
    "target_duration_sec": 8,
    "screen_type": "stock video",
    "on_screen_visual_keywords": "busy city, people on phones, generic SMS notifications",
    "action_notes": "Quick cuts, muted color palette"
  }
]
```

**Total screens:** 2
**Total duration:** ~16 seconds"#;

#[test]
fn two_screen_reply_extracts_and_validates() {
    let result = extract_storyboard(TWO_SCREEN_REPLY, true);

    assert!(result.success);
    assert_eq!(result.data.as_ref().unwrap().len(), 2);
    assert!(result.error.is_none());

    let validated = result.validated_data.unwrap();
    assert_eq!(validated.len(), 2);
    assert_eq!(validated[0].screen_type, ScreenType::TextOverlay);
    assert_eq!(validated[1].screen_type, ScreenType::StockVideo);
}

#[test]
fn fenced_array_of_n_screens_yields_n_records() {
    let text = r#"```json
[
  {"screen_number": 1, "voiceover_text": "One", "target_duration_sec": 5, "screen_type": "cta"},
  {"screen_number": 2, "voiceover_text": "Two", "target_duration_sec": 5, "screen_type": "cta"},
  {"screen_number": 3, "voiceover_text": "Three", "target_duration_sec": 5, "screen_type": "cta"}
]
```"#;

    let result = extract_storyboard(text, true);
    assert!(result.success);
    assert_eq!(result.data.as_ref().unwrap().len(), 3);
    assert_eq!(result.validated_data.unwrap().len(), 3);
}

#[test]
fn text_without_brackets_reports_no_blocks_found() {
    let result = extract_storyboard("This is just plain text with no JSON.", true);

    assert!(!result.success);
    assert!(result.error.unwrap().contains("No JSON blocks found"));
    assert!(result.data.is_none());
    assert!(result.raw_json_strings.is_none());
}

#[test]
fn broken_json_reports_parse_failure_with_candidates() {
    let text = "```json\n[{\"screen_number\": 1, \"voiceover_text\": \"test\"\n```";

    let result = extract_storyboard(text, true);
    assert!(!result.success);
    assert!(
        result
            .error
            .unwrap()
            .contains("Failed to parse any JSON blocks")
    );
    // The attempted candidates are kept for diagnosis.
    assert_eq!(result.raw_json_strings.unwrap().len(), 1);
}

#[test]
fn extraction_without_validation_accepts_any_records() {
    let text = "```json\n[{\"any_field\": \"any_value\"}]\n```";

    let result = extract_storyboard(text, false);
    assert!(result.success);
    assert_eq!(result.data.as_ref().unwrap().len(), 1);
    assert!(result.validated_data.is_none());
    assert!(result.error.is_none());
}

#[test]
fn validation_failure_keeps_raw_data_and_reports_the_error() {
    let text = "```json\n[{\"any_field\": \"any_value\"}]\n```";

    let result = extract_storyboard(text, true);
    assert!(result.success);
    assert_eq!(result.data.as_ref().unwrap().len(), 1);
    assert!(result.validated_data.is_none());
    assert!(result.error.is_some());
}

#[test]
fn records_from_multiple_blocks_concatenate_in_discovery_order() {
    let text = "First:\n```json\n[{\"screen_number\": 1, \"voiceover_text\": \"One\", \"target_duration_sec\": 5, \"screen_type\": \"cta\"}]\n```\nSecond:\n```json\n[{\"screen_number\": 2, \"voiceover_text\": \"Two\", \"target_duration_sec\": 5, \"screen_type\": \"cta\"}]\n```";

    let result = extract_storyboard(text, true);
    assert!(result.success);

    let data = result.data.unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["screen_number"], 1);
    assert_eq!(data[1]["screen_number"], 2);
    assert_eq!(result.raw_json_strings.unwrap().len(), 2);
}

#[test]
fn lone_object_block_contributes_one_record() {
    let text = "{\"screen_number\": 1, \"voiceover_text\": \"Solo\", \"target_duration_sec\": 5, \"screen_type\": \"talking head\"}";

    let result = extract_storyboard(text, true);
    assert!(result.success);
    assert_eq!(result.data.as_ref().unwrap().len(), 1);
    assert_eq!(
        result.validated_data.unwrap()[0].screen_type,
        ScreenType::TalkingHead
    );
}

#[test]
fn validated_screens_format_into_story_records() {
    let result = extract_storyboard(TWO_SCREEN_REPLY, true);
    let validated = result.validated_data.unwrap();

    let stories = format_stories(&validated);
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].screen_name, "screen_1");
    assert_eq!(stories[0].description, validated[0].voiceover_text);
    assert!(stories[0].screen_title.ends_with("..."));
    assert_eq!(stories[1].screen_type, ScreenType::StockVideo);
}
