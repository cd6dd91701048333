use axum::{
    extract::{Path, State},
    Json,
};

use staffcost_core::staffing::CostReport;

use crate::{handlers::AppError, state::AppState};

/// Recompute and store a project's price
/// (GET /calculator/projects/{project_id}/calculate).
pub async fn calculate_project_cost(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<CostReport>, AppError> {
    Ok(Json(state.costs.calculate_project_cost(project_id).await?))
}
