use async_trait::async_trait;

use crate::staffing::{
    Project, ProjectRole, Role, UpdateProjectRequest, UpdateProjectRoleRequest, UpdateRoleRequest,
};

use super::Result;

/// Store operations for projects.
///
/// Every method is one atomic unit of work against the system of record.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Inserts a project and returns it with its generated ID.
    async fn insert_project(&self, project: &Project) -> Result<Project>;

    /// Gets a project by its ID.
    async fn get_project(&self, id: i64) -> Result<Option<Project>>;

    /// Lists all projects ordered by ID.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Applies a partial update. Returns `None` if the project does not exist.
    async fn update_project(
        &self,
        id: i64,
        update: &UpdateProjectRequest,
    ) -> Result<Option<Project>>;

    /// Deletes a project. Returns the removed row, or `None` if it did not exist.
    async fn delete_project(&self, id: i64) -> Result<Option<Project>>;

    /// Writes the derived total price. Returns whether the project existed.
    async fn set_project_price(&self, id: i64, total_price: i64) -> Result<bool>;
}

/// Store operations for roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Inserts a role and returns it with its generated ID.
    async fn insert_role(&self, role: &Role) -> Result<Role>;

    /// Gets a role by its ID.
    async fn get_role(&self, id: i64) -> Result<Option<Role>>;

    /// Lists all roles ordered by ID.
    async fn list_roles(&self) -> Result<Vec<Role>>;

    /// Applies a partial update. Returns `None` if the role does not exist.
    async fn update_role(&self, id: i64, update: &UpdateRoleRequest) -> Result<Option<Role>>;

    /// Deletes a role. Returns the removed row, or `None` if it did not exist.
    async fn delete_role(&self, id: i64) -> Result<Option<Role>>;
}

/// Store operations for project-role assignments.
#[async_trait]
pub trait ProjectRoleStore: Send + Sync {
    /// Inserts an assignment and returns it with its generated ID.
    async fn insert_project_role(&self, project_role: &ProjectRole) -> Result<ProjectRole>;

    /// Gets an assignment by its ID.
    async fn get_project_role(&self, id: i64) -> Result<Option<ProjectRole>>;

    /// Lists the assignments of one project ordered by ID.
    async fn list_project_roles_by_project(&self, project_id: i64) -> Result<Vec<ProjectRole>>;

    /// Applies a partial update. Returns `None` if the assignment does not exist.
    async fn update_project_role(
        &self,
        id: i64,
        update: &UpdateProjectRoleRequest,
    ) -> Result<Option<ProjectRole>>;

    /// Deletes an assignment. Returns the removed row, or `None` if it did not exist.
    async fn delete_project_role(&self, id: i64) -> Result<Option<ProjectRole>>;
}
