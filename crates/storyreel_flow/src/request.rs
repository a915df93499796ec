//! Request payload for the flow engine's run endpoint.

use derive_getters::Getters;
use serde::Serialize;

/// Payload for `POST /api/v1/run/{flow_id}`.
///
/// Input and output are always chat-typed for this service; the engine
/// threads conversation state through `session_id`.
///
/// # Examples
///
/// ```
/// use storyreel_flow::FlowRequest;
///
/// let request = FlowRequest::new("Draft a 60 second storyboard")
///     .with_session_id("project-42");
/// assert_eq!(request.input_type(), "chat");
/// assert_eq!(request.session_id().as_deref(), Some("project-42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct FlowRequest {
    /// The user message to send through the flow
    input_value: String,
    /// Input modality, always "chat" here
    input_type: String,
    /// Output modality, always "chat" here
    output_type: String,
    /// Conversation session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
}

impl FlowRequest {
    /// Create a chat-typed request for the given user message.
    pub fn new(input_value: impl Into<String>) -> Self {
        Self {
            input_value: input_value.into(),
            input_type: "chat".to_string(),
            output_type: "chat".to_string(),
            session_id: None,
        }
    }

    /// Thread a conversation session through the engine.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}
