//! Extraction pipeline error types.

/// Kinds of extraction errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractErrorKind {
    /// No candidate JSON blocks were located in the text
    #[display("No JSON blocks found in the text")]
    NoBlocksFound,
    /// Every located candidate block failed JSON decoding
    #[display("Failed to parse any JSON blocks")]
    ParseFailure,
    /// A single block failed JSON decoding
    #[display("Failed to parse JSON: {}", _0)]
    Json(String),
    /// A record failed schema validation
    #[display("Validation failed: {}", _0)]
    Validation(String),
}

/// Extraction error with location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::NoBlocksFound);
/// assert!(format!("{}", err).contains("No JSON blocks"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
