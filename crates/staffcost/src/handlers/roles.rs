use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffcost_core::staffing::{CreateRoleRequest, Role, UpdateRoleRequest};
use staffcost_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all roles (GET /roles). Served from the cache when possible.
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, AppError> {
    Ok(Json(state.roles.list().await?))
}

/// Create a new role (POST /roles).
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let role = state.roles.create(payload).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// Get a single role by ID (GET /roles/{id}).
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Role>, AppError> {
    let role = state
        .roles
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Role", id))?;
    Ok(Json(role))
}

/// Update a role by ID (PUT /roles/{id}).
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<Role>, AppError> {
    Ok(Json(state.roles.update(id, &payload).await?))
}

/// Delete a role by ID (DELETE /roles/{id}).
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.roles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
