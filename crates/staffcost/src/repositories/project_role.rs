//! Project role repository.
//!
//! Assignments are cached two ways: one entry per assignment id and one
//! list per project. Writes invalidate both, so a reader of either key
//! sees the store's state once the write returns.

use std::sync::Arc;

use staffcost_core::cache::{
    deserialize_project_role, deserialize_project_roles, serialize_project_role,
    serialize_project_roles, CacheKeys,
};
use staffcost_core::staffing::{
    validate_project_role, validate_project_role_update, CreateProjectRoleRequest, ProjectRole,
    UpdateProjectRoleRequest,
};
use staffcost_core::storage::{ProjectRoleStore, RepositoryError, Result};

use super::{ProjectRepository, RoleRepository};
use crate::cache::FailSafeCache;

#[derive(Clone)]
pub struct ProjectRoleRepository {
    store: Arc<dyn ProjectRoleStore>,
    roles: RoleRepository,
    projects: ProjectRepository,
    cache: FailSafeCache,
    keys: Arc<CacheKeys>,
}

impl ProjectRoleRepository {
    pub fn new(
        store: Arc<dyn ProjectRoleStore>,
        roles: RoleRepository,
        projects: ProjectRepository,
        cache: FailSafeCache,
        keys: Arc<CacheKeys>,
    ) -> Self {
        Self {
            store,
            roles,
            projects,
            cache,
            keys,
        }
    }

    /// Creates an assignment.
    ///
    /// Both references are checked against the store before anything is
    /// written; if either is missing the store is never asked to insert.
    pub async fn create(&self, request: CreateProjectRoleRequest) -> Result<ProjectRole> {
        let assignment = request.into_project_role();
        validate_project_role(&assignment)?;

        let (project_id, role_id) = (assignment.project_id, assignment.role_id);
        if !self.roles.is_role(role_id).await? || !self.projects.is_project(project_id).await? {
            tracing::debug!(project_id, role_id, "Rejected project role with missing reference");
            return Err(RepositoryError::MissingReference {
                project_id,
                role_id,
            });
        }

        let assignment = self.store.insert_project_role(&assignment).await?;
        self.cache.delete(&self.keys.project_roles(project_id)).await;

        tracing::debug!(
            project_role_id = assignment.id,
            project_id,
            role_id,
            "Project role created"
        );
        Ok(assignment)
    }

    /// Lists a project's assignments, read-through.
    pub async fn get_by_project_id(&self, project_id: i64) -> Result<Vec<ProjectRole>> {
        let cache_key = self.keys.project_roles(project_id);

        if let Some(bytes) = self.cache.get(&cache_key).await {
            match deserialize_project_roles(&bytes) {
                Ok(assignments) => {
                    tracing::trace!(project_id, "Cache hit for project roles");
                    return Ok(assignments);
                }
                Err(err) => {
                    tracing::warn!(project_id, error = %err, "Cached project roles are unreadable");
                }
            }
        }

        tracing::trace!(project_id, "Cache miss for project roles");
        let assignments = self.store.list_project_roles_by_project(project_id).await?;

        match serialize_project_roles(&assignments) {
            Ok(bytes) => self.cache.set(&cache_key, &bytes).await,
            Err(err) => tracing::warn!(project_id, error = %err, "Failed to serialize project roles"),
        }

        Ok(assignments)
    }

    /// Gets one assignment, read-through. A missing row is never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProjectRole>> {
        let cache_key = self.keys.project_role(id);

        if let Some(bytes) = self.cache.get(&cache_key).await {
            match deserialize_project_role(&bytes) {
                Ok(assignment) => {
                    tracing::trace!(project_role_id = id, "Cache hit for project role");
                    return Ok(Some(assignment));
                }
                Err(err) => {
                    tracing::warn!(project_role_id = id, error = %err, "Cached project role is unreadable");
                }
            }
        }

        tracing::trace!(project_role_id = id, "Cache miss for project role");
        let assignment = self.store.get_project_role(id).await?;

        if let Some(ref assignment) = assignment {
            match serialize_project_role(assignment) {
                Ok(bytes) => self.cache.set(&cache_key, &bytes).await,
                Err(err) => {
                    tracing::warn!(project_role_id = id, error = %err, "Failed to serialize project role")
                }
            }
        }

        Ok(assignment)
    }

    /// Applies `count` and `custom_rate` only when present, then invalidates
    /// the assignment's entry and its project's list.
    pub async fn update(&self, id: i64, update: &UpdateProjectRoleRequest) -> Result<ProjectRole> {
        validate_project_role_update(update)?;

        let assignment = self
            .store
            .update_project_role(id, update)
            .await?
            .ok_or_else(|| RepositoryError::not_found("ProjectRole", id))?;
        self.invalidate(&assignment).await;

        tracing::debug!(
            project_role_id = id,
            project_id = assignment.project_id,
            "Project role updated"
        );
        Ok(assignment)
    }

    /// Deletes an assignment, then invalidates its entry and its project's list.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let assignment = self
            .store
            .delete_project_role(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("ProjectRole", id))?;
        self.invalidate(&assignment).await;

        tracing::debug!(
            project_role_id = id,
            project_id = assignment.project_id,
            "Project role deleted"
        );
        Ok(())
    }

    async fn invalidate(&self, assignment: &ProjectRole) {
        self.cache
            .delete(&self.keys.project_role(assignment.id))
            .await;
        self.cache
            .delete(&self.keys.project_roles(assignment.project_id))
            .await;
    }
}
