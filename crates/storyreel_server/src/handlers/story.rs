//! Story listing.

use crate::{AppState, ServerResult};
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;
use storyreel_core::StoryRecord;

/// `GET /api/projects/{project_id}/stories`
pub async fn list_stories(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> ServerResult<Json<Vec<StoryRecord>>> {
    Ok(Json(state.store.list_stories(&project_id).await?))
}
