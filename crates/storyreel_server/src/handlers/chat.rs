//! Chat history and chat-turn handlers.

use crate::{AppState, ServerResult};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storyreel_core::{ChatMessage, Role, StoryRecord};
use storyreel_extract::{extract_storyboard, format_stories};
use tracing::warn;

/// What the user sees when the flow engine is unreachable. The chat turn
/// itself still succeeds; upstream faults are never surfaced as HTTP
/// errors.
const UPSTREAM_APOLOGY: &str =
    "I'm having trouble processing your request right now. Please try again later.";

/// Body for `POST /api/projects/{project_id}/chat/message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurnRequest {
    /// The user's message for this turn
    pub message: String,
    /// Whether the reply is expected to carry a storyboard to extract.
    /// An explicit flag from the caller, not inferred from content.
    #[serde(default)]
    pub extract_storyboard: bool,
}

/// Response for a chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnResponse {
    /// The assistant's reply text
    pub reply: String,
    /// Story records persisted from this turn, if any
    pub stories: Vec<StoryRecord>,
    /// IDs assigned to the persisted records
    pub story_ids: Vec<String>,
    /// Extraction diagnostic when a storyboard was requested but could not
    /// be validated
    pub extraction_error: Option<String>,
}

/// `GET /api/projects/{project_id}/chat`
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> ServerResult<Json<Vec<ChatMessage>>> {
    state.store.load_project(&project_id).await?;
    Ok(Json(state.store.load_chat(&project_id).await?))
}

/// `PUT /api/projects/{project_id}/chat`
pub async fn put_chat(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(messages): Json<Vec<ChatMessage>>,
) -> ServerResult<StatusCode> {
    state.store.load_project(&project_id).await?;
    state.store.save_chat(&project_id, &messages).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/projects/{project_id}/chat/message`
///
/// One conversational turn: send the message through the flow engine,
/// unwrap the reply, persist the exchange, and, when the caller flagged
/// the turn as storyboard-producing, run extraction and persist the
/// validated screens as story records.
pub async fn post_chat_message(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(request): Json<ChatTurnRequest>,
) -> ServerResult<Json<ChatTurnResponse>> {
    state.store.load_project(&project_id).await?;

    let reply = match state
        .flow
        .reply(&request.message, Some(project_id.as_str()))
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Flow engine call failed; replying with apology");
            append_turn(&state, &project_id, &request.message, UPSTREAM_APOLOGY).await?;
            return Ok(Json(ChatTurnResponse {
                reply: UPSTREAM_APOLOGY.to_string(),
                stories: Vec::new(),
                story_ids: Vec::new(),
                extraction_error: None,
            }));
        }
    };

    append_turn(&state, &project_id, &request.message, &reply).await?;

    let mut stories = Vec::new();
    let mut story_ids = Vec::new();
    let mut extraction_error = None;

    if request.extract_storyboard {
        let result = extract_storyboard(&reply, true);
        match result.validated_data {
            Some(validated) => {
                let records = format_stories(&validated);
                story_ids = state.store.save_stories(&project_id, &records).await?;
                stories = records;
            }
            None => {
                // Raw data may still be present; nothing is persisted
                // without a validated batch, but the caller learns why.
                extraction_error = result.error;
            }
        }
    }

    Ok(Json(ChatTurnResponse {
        reply,
        stories,
        story_ids,
        extraction_error,
    }))
}

/// Append one user/assistant exchange to the stored history.
async fn append_turn(
    state: &AppState,
    project_id: &str,
    user_message: &str,
    assistant_reply: &str,
) -> ServerResult<()> {
    let mut history = state.store.load_chat(project_id).await?;
    history.push(ChatMessage {
        role: Role::User,
        content: user_message.to_string(),
    });
    history.push(ChatMessage {
        role: Role::Assistant,
        content: assistant_reply.to_string(),
    });
    state.store.save_chat(project_id, &history).await?;
    Ok(())
}
