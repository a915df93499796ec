//! Chat message types for conversation history.

use serde::{Deserialize, Serialize};

/// Role of a conversation participant.
///
/// # Examples
///
/// ```
/// use storyreel_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}

/// A message in a project's conversation history.
///
/// # Examples
///
/// ```
/// use storyreel_core::{ChatMessage, Role};
///
/// let message = ChatMessage {
///     role: Role::User,
///     content: "Make screen two punchier.".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}
