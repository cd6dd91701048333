//! Project cost calculation.
//!
//! Reads a project and its team through the repositories, prices it with
//! the pure calculator from `staffcost_core::costing`, and stores the
//! result on the project.

use staffcost_core::costing::{calculate_cost, clamp_total_price, TeamRole, PRICE_CEILING};
use staffcost_core::staffing::CostReport;
use staffcost_core::storage::{RepositoryError, Result};

use crate::repositories::{ProjectRepository, ProjectRoleRepository, RoleRepository};

#[derive(Clone)]
pub struct CostService {
    projects: ProjectRepository,
    roles: RoleRepository,
    project_roles: ProjectRoleRepository,
}

impl CostService {
    pub fn new(
        projects: ProjectRepository,
        roles: RoleRepository,
        project_roles: ProjectRoleRepository,
    ) -> Self {
        Self {
            projects,
            roles,
            project_roles,
        }
    }

    /// Recomputes and stores a project's total price.
    ///
    /// Assignments whose role has been deleted are left out of the sum.
    /// A total at or above [`PRICE_CEILING`] is stored as the ceiling.
    pub async fn calculate_project_cost(&self, project_id: i64) -> Result<CostReport> {
        let mut project = self
            .projects
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Project", project_id))?;

        let assignments = self.project_roles.get_by_project_id(project_id).await?;
        if assignments.is_empty() {
            return Err(RepositoryError::NoProjectRoles { project_id });
        }

        let mut team = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            let Some(role) = self.roles.get_by_id(assignment.role_id).await? else {
                tracing::debug!(
                    project_id,
                    project_role_id = assignment.id,
                    role_id = assignment.role_id,
                    "Skipping project role whose role no longer exists"
                );
                continue;
            };
            team.push(TeamRole::new(
                assignment.count,
                assignment.effective_rate(&role),
            ));
        }

        let coefficients = [project.coefficient];
        let total = calculate_cost(&team, &coefficients);
        let total_price = clamp_total_price(total);

        if !self.projects.set_price(project_id, total_price).await? {
            tracing::warn!(project_id, "Project disappeared before its price was stored");
        }
        project.total_price = Some(total_price);

        tracing::info!(
            project_id,
            total_price,
            count = team.len(),
            clamped = total_price == PRICE_CEILING,
            "Project cost calculated"
        );

        Ok(CostReport {
            project,
            total_price,
        })
    }
}
