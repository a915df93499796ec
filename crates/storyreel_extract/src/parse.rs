//! Safe JSON parsing.

use storyreel_error::{ExtractError, ExtractErrorKind};

/// Decode a JSON string, reporting failure instead of propagating it.
///
/// # Errors
///
/// Returns [`ExtractErrorKind::Json`] carrying the underlying decode
/// message. Never panics.
///
/// # Examples
///
/// ```
/// use storyreel_extract::parse_json_safely;
///
/// let value = parse_json_safely(r#"[{"test": "value"}]"#).unwrap();
/// assert!(value.is_array());
///
/// assert!(parse_json_safely(r#"[{"test": "value""#).is_err());
/// ```
pub fn parse_json_safely(text: &str) -> Result<serde_json::Value, ExtractError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse JSON block");
        ExtractError::new(ExtractErrorKind::Json(e.to_string()))
    })
}
