//! Conversational-flow engine error types.

/// Kinds of flow engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FlowErrorKind {
    /// Request could not be sent (connection refused, timeout, DNS)
    #[display("Request failed: {}", _0)]
    Http(String),
    /// The flow engine returned a non-success status
    #[display("Flow engine returned status {}: {}", status, message)]
    ApiStatus {
        /// HTTP status code returned by the engine
        status: u16,
        /// Response body, as returned
        message: String,
    },
    /// The response body was not valid JSON
    #[display("Failed to decode flow response: {}", _0)]
    Decode(String),
}

/// Flow engine error with location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{FlowError, FlowErrorKind};
///
/// let err = FlowError::new(FlowErrorKind::Http("connection refused".into()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Flow Error: {} at line {} in {}", kind, line, file)]
pub struct FlowError {
    /// The kind of error that occurred
    pub kind: FlowErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FlowError {
    /// Create a new flow error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FlowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
