//! Top-level error wrapper types.

use crate::{ConfigError, ExtractError, FlowError, StorageError, ValidationError};

/// This is the foundation error enum. Each storyreel crate contributes the
/// variant covering its concern.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field");
/// let err: StoryreelError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Domain validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Extraction pipeline error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Conversational-flow engine error
    #[from(FlowError)]
    Flow(FlowError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ConfigError};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyreel operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ValidationError};
///
/// fn check_duration(duration: u32) -> StoryreelResult<u32> {
///     if duration == 0 {
///         Err(ValidationError::new("duration must be greater than zero"))?
///     }
///     Ok(duration)
/// }
/// ```
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
