use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffcost_core::staffing::{CreateProjectRequest, Project, UpdateProjectRequest};
use staffcost_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all projects (GET /projects).
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.projects.list().await?))
}

/// Create a new project (POST /projects).
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project = state.projects.create(payload).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a single project by ID (GET /projects/{id}).
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let project = state
        .projects
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Project", id))?;
    Ok(Json(project))
}

/// Update a project by ID (PUT /projects/{id}).
///
/// Only the fields present in the body are changed.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    Ok(Json(state.projects.update(id, &payload).await?))
}

/// Delete a project by ID (DELETE /projects/{id}).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
