//! Route table.

use crate::{AppState, handlers};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/projects",
            post(handlers::create_project).get(handlers::list_projects),
        )
        .route(
            "/api/projects/:project_id",
            get(handlers::get_project)
                .put(handlers::update_project)
                .delete(handlers::delete_project),
        )
        .route(
            "/api/projects/:project_id/chat",
            get(handlers::get_chat).put(handlers::put_chat),
        )
        .route(
            "/api/projects/:project_id/chat/message",
            post(handlers::post_chat_message),
        )
        .route(
            "/api/projects/:project_id/stories",
            get(handlers::list_stories),
        )
        .with_state(state)
}
