//! Project CRUD handlers.

use crate::{AppState, ServerResult};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use storyreel_core::{Project, ProjectRequirements};

/// Body for `POST /api/projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: Option<String>,
    /// Project requirements
    #[serde(default)]
    pub requirements: Option<ProjectRequirements>,
}

/// Body for `PUT /api/projects/{project_id}`. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectRequest {
    /// New project name
    #[serde(default)]
    pub name: Option<String>,
    /// New project description
    #[serde(default)]
    pub description: Option<String>,
    /// New project requirements
    #[serde(default)]
    pub requirements: Option<ProjectRequirements>,
}

/// `POST /api/projects`
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProjectRequest>,
) -> ServerResult<(StatusCode, Json<Project>)> {
    let project = state
        .store
        .create_project(request.name, request.description, request.requirements)
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /api/projects`
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> ServerResult<Json<Vec<Project>>> {
    Ok(Json(state.store.list_projects().await?))
}

/// `GET /api/projects/{project_id}`
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> ServerResult<Json<Project>> {
    Ok(Json(state.store.load_project(&project_id).await?))
}

/// `PUT /api/projects/{project_id}`
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> ServerResult<Json<Project>> {
    let mut project = state.store.load_project(&project_id).await?;

    if let Some(name) = request.name {
        project.name = name;
    }
    if let Some(description) = request.description {
        project.description = Some(description);
    }
    if let Some(requirements) = request.requirements {
        project.requirements = Some(requirements);
    }

    Ok(Json(state.store.update_project(project).await?))
}

/// `DELETE /api/projects/{project_id}`
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> ServerResult<StatusCode> {
    state.store.delete_project(&project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
