use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffcost_core::staffing::{CreateProjectRoleRequest, ProjectRole, UpdateProjectRoleRequest};
use staffcost_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Assign a role to a project (POST /project-roles).
///
/// Responds 404 when the project or the role does not exist.
pub async fn create_project_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = state.project_roles.create(payload).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List the assignments of a project (GET /project-roles/project/{project_id}).
pub async fn list_project_roles(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<ProjectRole>>, AppError> {
    Ok(Json(
        state.project_roles.get_by_project_id(project_id).await?,
    ))
}

/// Get a single assignment by ID (GET /project-roles/{id}).
pub async fn get_project_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectRole>, AppError> {
    let assignment = state
        .project_roles
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("ProjectRole", id))?;
    Ok(Json(assignment))
}

/// Update an assignment by ID (PUT /project-roles/{id}).
pub async fn update_project_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRoleRequest>,
) -> Result<Json<ProjectRole>, AppError> {
    Ok(Json(state.project_roles.update(id, &payload).await?))
}

/// Delete an assignment by ID (DELETE /project-roles/{id}).
pub async fn delete_project_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.project_roles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
