//! Test doubles shared by the unit tests of this crate.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffcost_core::cache::{Cache, CacheError, Result as CacheResult};
use staffcost_core::staffing::{
    Project, ProjectRole, Role, UpdateProjectRequest, UpdateProjectRoleRequest, UpdateRoleRequest,
};
use staffcost_core::storage::{ProjectRoleStore, ProjectStore, Result, RoleStore};

/// Store double that counts every call by operation name.
///
/// It performs no foreign-key checks, so tests can observe that the
/// repositories validate references themselves.
#[derive(Default)]
pub struct MockStore {
    projects: RwLock<BTreeMap<i64, Project>>,
    roles: RwLock<BTreeMap<i64, Role>>,
    project_roles: RwLock<BTreeMap<i64, ProjectRole>>,
    next_id: AtomicI64,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the named store operation ran.
    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(operation).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn record(&self, operation: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(operation).or_insert(0) += 1;
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Seeds a project without counting a call.
    pub async fn seed_project(&self, name: &str, coefficient: f64) -> Project {
        let project = Project::new(name, coefficient).with_id(self.next_id());
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        project
    }

    /// Seeds a role without counting a call.
    pub async fn seed_role(&self, name: &str, default_rate: i64) -> Role {
        let role = Role::new(name, default_rate).with_id(self.next_id());
        self.roles.write().await.insert(role.id, role.clone());
        role
    }

    /// Seeds an assignment without counting a call.
    pub async fn seed_project_role(&self, assignment: ProjectRole) -> ProjectRole {
        let assignment = assignment.with_id(self.next_id());
        self.project_roles
            .write()
            .await
            .insert(assignment.id, assignment.clone());
        assignment
    }

    /// Removes an assignment behind the repositories' back.
    pub async fn remove_project_role(&self, id: i64) {
        self.project_roles.write().await.remove(&id);
    }

    pub async fn project_role_count(&self) -> usize {
        self.project_roles.read().await.len()
    }
}

#[async_trait]
impl ProjectStore for MockStore {
    async fn insert_project(&self, project: &Project) -> Result<Project> {
        self.record("insert_project");
        let project = project.clone().with_id(self.next_id());
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        self.record("get_project");
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.record("list_projects");
        Ok(self.projects.read().await.values().cloned().collect())
    }

    async fn update_project(
        &self,
        id: i64,
        update: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        self.record("update_project");
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            update.apply_to(project);
            project.clone()
        }))
    }

    async fn delete_project(&self, id: i64) -> Result<Option<Project>> {
        self.record("delete_project");
        Ok(self.projects.write().await.remove(&id))
    }

    async fn set_project_price(&self, id: i64, total_price: i64) -> Result<bool> {
        self.record("set_project_price");
        let mut projects = self.projects.write().await;
        Ok(match projects.get_mut(&id) {
            Some(project) => {
                project.total_price = Some(total_price);
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl RoleStore for MockStore {
    async fn insert_role(&self, role: &Role) -> Result<Role> {
        self.record("insert_role");
        let role = role.clone().with_id(self.next_id());
        self.roles.write().await.insert(role.id, role.clone());
        Ok(role)
    }

    async fn get_role(&self, id: i64) -> Result<Option<Role>> {
        self.record("get_role");
        Ok(self.roles.read().await.get(&id).cloned())
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.record("list_roles");
        Ok(self.roles.read().await.values().cloned().collect())
    }

    async fn update_role(&self, id: i64, update: &UpdateRoleRequest) -> Result<Option<Role>> {
        self.record("update_role");
        let mut roles = self.roles.write().await;
        Ok(roles.get_mut(&id).map(|role| {
            update.apply_to(role);
            role.clone()
        }))
    }

    async fn delete_role(&self, id: i64) -> Result<Option<Role>> {
        self.record("delete_role");
        Ok(self.roles.write().await.remove(&id))
    }
}

#[async_trait]
impl ProjectRoleStore for MockStore {
    async fn insert_project_role(&self, project_role: &ProjectRole) -> Result<ProjectRole> {
        self.record("insert_project_role");
        let assignment = project_role.clone().with_id(self.next_id());
        self.project_roles
            .write()
            .await
            .insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn get_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        self.record("get_project_role");
        Ok(self.project_roles.read().await.get(&id).cloned())
    }

    async fn list_project_roles_by_project(&self, project_id: i64) -> Result<Vec<ProjectRole>> {
        self.record("list_project_roles_by_project");
        Ok(self
            .project_roles
            .read()
            .await
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
        self.record("update_project_role");
        let mut project_roles = self.project_roles.write().await;
        Ok(project_roles.get_mut(&id).map(|assignment| {
            update.apply_to(assignment);
            assignment.clone()
        }))
    }

    async fn delete_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        self.record("delete_project_role");
        Ok(self.project_roles.write().await.remove(&id))
    }
}

/// Cache double that remembers the TTL of every value.
#[derive(Default)]
pub struct MockCache {
    store: RwLock<HashMap<String, (Vec<u8>, Option<Duration>)>>,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains_key(key)
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.store.read().await.get(key).and_then(|(_, ttl)| *ttl)
    }

    /// Puts raw bytes under a key, bypassing the repositories.
    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.store
            .write()
            .await
            .insert(key.to_string(), (value.to_vec(), None));
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self
            .store
            .read()
            .await
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
        self.store
            .write()
            .await
            .insert(key.to_string(), (value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.remove(key);
        Ok(())
    }
}

/// Cache double whose backend is always down.
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::OperationFailed("READONLY".to_string()))
    }
}

/// Cache double that answers only after a delay.
pub struct SlowCache {
    delay: Duration,
}

impl SlowCache {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Cache for SlowCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
