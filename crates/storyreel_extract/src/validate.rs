//! Screen-type normalization and schema validation.

use serde_json::Value;
use storyreel_core::StoryboardScreen;
use storyreel_error::{ExtractError, ExtractErrorKind};

/// Rewrite a free-form screen-type label onto the fixed enumeration.
///
/// Lower-cases the label and matches by substring, first match wins, in
/// this precedence order: slide/text, stock, talking, screen, cta.
/// Unmatched labels pass through unchanged and are rejected by enumeration
/// validation downstream; unknown types are not silently coerced.
///
/// The rewrite is pure and idempotent: canonical values map to themselves.
///
/// # Examples
///
/// ```
/// use storyreel_extract::normalize_screen_type;
///
/// assert_eq!(normalize_screen_type("slides/text overlay"), "text-overlay");
/// assert_eq!(normalize_screen_type("Stock Video"), "stock-video");
/// assert_eq!(normalize_screen_type("text-overlay"), "text-overlay");
/// assert_eq!(normalize_screen_type("hologram"), "hologram");
/// ```
pub fn normalize_screen_type(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.contains("slide") || lowered.contains("text") {
        "text-overlay".to_string()
    } else if lowered.contains("stock") {
        "stock-video".to_string()
    } else if lowered.contains("talking") {
        "talking-head".to_string()
    } else if lowered.contains("screen") {
        "screencast".to_string()
    } else if lowered.contains("cta") {
        "cta".to_string()
    } else {
        raw.to_string()
    }
}

/// Validate raw records against the storyboard screen schema.
///
/// Each record's `screen_type` is normalized before validation. Fails fast
/// at the first invalid record with the field-level error; a batch is only
/// valid if every record is.
///
/// # Errors
///
/// Returns [`ExtractErrorKind::Validation`] naming the failing record and
/// field.
pub fn validate_screens(records: &[Value]) -> Result<Vec<StoryboardScreen>, ExtractError> {
    let mut screens = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let mut record = record.clone();
        if let Some(obj) = record.as_object_mut() {
            let normalized = obj
                .get("screen_type")
                .and_then(Value::as_str)
                .map(normalize_screen_type);
            if let Some(label) = normalized {
                obj.insert("screen_type".to_string(), Value::String(label));
            }
        }

        let screen: StoryboardScreen = serde_json::from_value(record).map_err(|e| {
            tracing::error!(record = index + 1, error = %e, "Screen failed schema validation");
            ExtractError::new(ExtractErrorKind::Validation(format!(
                "record {}: {}",
                index + 1,
                e
            )))
        })?;

        check_screen(&screen, index)?;
        screens.push(screen);
    }

    Ok(screens)
}

/// Field constraints the schema's types cannot express.
fn check_screen(screen: &StoryboardScreen, index: usize) -> Result<(), ExtractError> {
    if screen.screen_number == 0 {
        return Err(ExtractError::new(ExtractErrorKind::Validation(format!(
            "record {}: screen_number must be positive",
            index + 1
        ))));
    }
    if screen.voiceover_text.trim().is_empty() {
        return Err(ExtractError::new(ExtractErrorKind::Validation(format!(
            "record {}: voiceover_text must not be empty",
            index + 1
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storyreel_core::ScreenType;

    #[test]
    fn valid_records_validate() {
        let records = vec![json!({
            "screen_number": 1,
            "voiceover_text": "Test voiceover",
            "target_duration_sec": 8,
            "screen_type": "stock-video",
            "on_screen_visual_keywords": "test keywords",
            "action_notes": "test notes"
        })];

        let screens = validate_screens(&records).unwrap();
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].screen_type, ScreenType::StockVideo);
    }

    #[test]
    fn synonym_labels_are_normalized_before_validation() {
        let records = vec![json!({
            "screen_number": 1,
            "voiceover_text": "Test",
            "target_duration_sec": 8,
            "screen_type": "slides/text overlay"
        })];

        let screens = validate_screens(&records).unwrap();
        assert_eq!(screens[0].screen_type, ScreenType::TextOverlay);
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_values() {
        for canonical in [
            "text-overlay",
            "stock-video",
            "talking-head",
            "screencast",
            "cta",
        ] {
            assert_eq!(normalize_screen_type(canonical), canonical);
        }
    }

    #[test]
    fn precedence_prefers_slide_and_text_over_later_rules() {
        // "text screencast" contains both "text" and "screen"; the
        // slide/text rule fires first.
        assert_eq!(normalize_screen_type("text screencast"), "text-overlay");
    }

    #[test]
    fn unknown_label_passes_through_and_fails_validation() {
        assert_eq!(normalize_screen_type("hologram"), "hologram");

        let records = vec![json!({
            "screen_number": 1,
            "voiceover_text": "Test",
            "target_duration_sec": 8,
            "screen_type": "hologram"
        })];
        let err = validate_screens(&records).unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::Validation(_)));
    }

    #[test]
    fn missing_required_fields_fail_with_field_error() {
        let records = vec![json!({"screen_number": 1})];
        let err = validate_screens(&records).unwrap_err();
        let message = err.kind.to_string();
        assert!(message.contains("record 1"), "got: {message}");
    }

    #[test]
    fn one_bad_record_fails_the_whole_batch() {
        let records = vec![
            json!({
                "screen_number": 1,
                "voiceover_text": "Fine",
                "target_duration_sec": 8,
                "screen_type": "cta"
            }),
            json!({"screen_number": 2}),
        ];
        let err = validate_screens(&records).unwrap_err();
        assert!(err.kind.to_string().contains("record 2"));
    }

    #[test]
    fn extra_fields_are_preserved() {
        let records = vec![json!({
            "screen_number": 1,
            "voiceover_text": "Test",
            "target_duration_sec": 8,
            "screen_type": "cta",
            "transition": "fade"
        })];

        let screens = validate_screens(&records).unwrap();
        assert_eq!(screens[0].extra["transition"], "fade");
    }

    #[test]
    fn zero_screen_number_is_rejected() {
        let records = vec![json!({
            "screen_number": 0,
            "voiceover_text": "Test",
            "target_duration_sec": 8,
            "screen_type": "cta"
        })];
        let err = validate_screens(&records).unwrap_err();
        assert!(err.kind.to_string().contains("screen_number"));
    }

    #[test]
    fn zero_duration_passes_shape_validation() {
        // Duration positivity is intentionally not enforced at this layer.
        let records = vec![json!({
            "screen_number": 1,
            "voiceover_text": "Test",
            "target_duration_sec": 0,
            "screen_type": "cta"
        })];
        assert!(validate_screens(&records).is_ok());
    }
}
