//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffcost_core::staffing::{
    Project, ProjectRole, Role, UpdateProjectRequest, UpdateProjectRoleRequest, UpdateRoleRequest,
};
use staffcost_core::storage::{ProjectRoleStore, ProjectStore, RepositoryError, Result, RoleStore};

/// Monotonic id sequence for one table. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
struct Sequence(AtomicI64);

impl Sequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// In-memory storage backend.
///
/// Tables are ordered maps wrapped in `Arc<RwLock<_>>`, so listings come
/// back ordered by id. Locks are always taken in the order projects, roles,
/// project roles.
///
/// Like the SQLite schema, an assignment must reference an existing project
/// and role when inserted, and a project cannot be deleted while
/// assignments still point at it. Roles can be deleted freely.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    projects: Arc<RwLock<BTreeMap<i64, Project>>>,
    roles: Arc<RwLock<BTreeMap<i64, Role>>>,
    project_roles: Arc<RwLock<BTreeMap<i64, ProjectRole>>>,
    project_ids: Arc<Sequence>,
    role_ids: Arc<Sequence>,
    project_role_ids: Arc<Sequence>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn insert_project(&self, project: &Project) -> Result<Project> {
        let mut projects = self.projects.write().await;
        let project = project.clone().with_id(self.project_ids.next());
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.values().cloned().collect())
    }

    async fn update_project(
        &self,
        id: i64,
        update: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            update.apply_to(project);
            project.clone()
        }))
    }

    async fn delete_project(&self, id: i64) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        if !projects.contains_key(&id) {
            return Ok(None);
        }

        let project_roles = self.project_roles.read().await;
        if project_roles.values().any(|pr| pr.project_id == id) {
            return Err(RepositoryError::InvalidData(format!(
                "Project {id} still has project roles"
            )));
        }

        Ok(projects.remove(&id))
    }

    async fn set_project_price(&self, id: i64, total_price: i64) -> Result<bool> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&id) {
            Some(project) => {
                project.total_price = Some(total_price);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl RoleStore for InMemoryStore {
    async fn insert_role(&self, role: &Role) -> Result<Role> {
        let mut roles = self.roles.write().await;
        let role = role.clone().with_id(self.role_ids.next());
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn get_role(&self, id: i64) -> Result<Option<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.get(&id).cloned())
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.values().cloned().collect())
    }

    async fn update_role(&self, id: i64, update: &UpdateRoleRequest) -> Result<Option<Role>> {
        let mut roles = self.roles.write().await;
        Ok(roles.get_mut(&id).map(|role| {
            update.apply_to(role);
            role.clone()
        }))
    }

    async fn delete_role(&self, id: i64) -> Result<Option<Role>> {
        let mut roles = self.roles.write().await;
        Ok(roles.remove(&id))
    }
}

#[async_trait]
impl ProjectRoleStore for InMemoryStore {
    async fn insert_project_role(&self, project_role: &ProjectRole) -> Result<ProjectRole> {
        let projects = self.projects.read().await;
        let roles = self.roles.read().await;
        if !projects.contains_key(&project_role.project_id)
            || !roles.contains_key(&project_role.role_id)
        {
            return Err(RepositoryError::InvalidData(format!(
                "Project {} or role {} does not exist",
                project_role.project_id, project_role.role_id
            )));
        }

        let mut project_roles = self.project_roles.write().await;
        let assignment = project_role.clone().with_id(self.project_role_ids.next());
        project_roles.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn get_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        let project_roles = self.project_roles.read().await;
        Ok(project_roles.get(&id).cloned())
    }

    async fn list_project_roles_by_project(&self, project_id: i64) -> Result<Vec<ProjectRole>> {
        let project_roles = self.project_roles.read().await;
        Ok(project_roles
            .values()
            .filter(|pr| pr.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn update_project_role(
        &self,
        id: i64,
        update: &UpdateProjectRoleRequest,
    ) -> Result<Option<ProjectRole>> {
        let mut project_roles = self.project_roles.write().await;
        Ok(project_roles.get_mut(&id).map(|assignment| {
            update.apply_to(assignment);
            assignment.clone()
        }))
    }

    async fn delete_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        let mut project_roles = self.project_roles.write().await;
        Ok(project_roles.remove(&id))
    }
}
