//! Project repository.
//!
//! Projects are never cached; every call goes straight to the store.

use std::sync::Arc;

use staffcost_core::staffing::{
    validate_project, validate_project_update, CreateProjectRequest, Project,
    UpdateProjectRequest,
};
use staffcost_core::storage::{ProjectStore, RepositoryError, Result};

#[derive(Clone)]
pub struct ProjectRepository {
    store: Arc<dyn ProjectStore>,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Creates a project. The returned row carries its generated id and `created_at`.
    pub async fn create(&self, request: CreateProjectRequest) -> Result<Project> {
        let project = request.into_project();
        validate_project(&project)?;

        let project = self.store.insert_project(&project).await?;
        tracing::debug!(project_id = project.id, name = %project.name, "Project created");
        Ok(project)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.store.get_project(id).await
    }

    pub async fn list(&self) -> Result<Vec<Project>> {
        self.store.list_projects().await
    }

    /// Existence check used to validate foreign keys.
    pub async fn is_project(&self, id: i64) -> Result<bool> {
        Ok(self.store.get_project(id).await?.is_some())
    }

    /// Applies only the fields present in `update`.
    pub async fn update(&self, id: i64, update: &UpdateProjectRequest) -> Result<Project> {
        validate_project_update(update)?;

        let project = self
            .store
            .update_project(id, update)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Project", id))?;

        tracing::debug!(project_id = id, "Project updated");
        Ok(project)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store
            .delete_project(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Project", id))?;

        tracing::debug!(project_id = id, "Project deleted");
        Ok(())
    }

    /// Writes the derived total price. Returns whether the project existed.
    pub async fn set_price(&self, id: i64, total_price: i64) -> Result<bool> {
        let updated = self.store.set_project_price(id, total_price).await?;
        tracing::debug!(project_id = id, total_price, updated, "Project price set");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockStore;

    fn repository() -> (Arc<MockStore>, ProjectRepository) {
        let store = Arc::new(MockStore::new());
        (store.clone(), ProjectRepository::new(store))
    }

    #[tokio::test]
    async fn test_create_returns_generated_fields() {
        let (_, projects) = repository();

        let project = projects
            .create(CreateProjectRequest::new("Website", 1.5))
            .await
            .unwrap();

        assert!(project.id > 0);
        assert_eq!(project.total_price, Some(0));
        assert_eq!(projects.get_by_id(project.id).await.unwrap(), Some(project));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_insert() {
        let (store, projects) = repository();

        let result = projects
            .create(CreateProjectRequest::new("Website", -1.0))
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(store.calls("insert_project"), 0);
    }

    #[tokio::test]
    async fn test_reads_are_store_direct() {
        let (store, projects) = repository();
        let project = store.seed_project("Website", 1.5).await;

        projects.get_by_id(project.id).await.unwrap();
        projects.get_by_id(project.id).await.unwrap();
        projects.list().await.unwrap();

        assert_eq!(store.calls("get_project"), 2);
        assert_eq!(store.calls("list_projects"), 1);
    }

    #[tokio::test]
    async fn test_is_project() {
        let (store, projects) = repository();
        let project = store.seed_project("Website", 1.5).await;

        assert!(projects.is_project(project.id).await.unwrap());
        assert!(!projects.is_project(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let (store, projects) = repository();
        let project = store.seed_project("Website", 1.5).await;

        let updated = projects
            .update(project.id, &UpdateProjectRequest::new().with_name("Portal"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Portal");
        assert_eq!(updated.coefficient, 1.5);
        assert_eq!(updated.created_at, project.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let (_, projects) = repository();

        let update = projects
            .update(7, &UpdateProjectRequest::new().with_coefficient(2.0))
            .await;
        let delete = projects.delete(7).await;

        assert_eq!(update, Err(RepositoryError::not_found("Project", 7)));
        assert_eq!(delete, Err(RepositoryError::not_found("Project", 7)));
    }

    #[tokio::test]
    async fn test_set_price_reports_existence() {
        let (store, projects) = repository();
        let project = store.seed_project("Website", 1.5).await;

        assert!(projects.set_price(project.id, 450).await.unwrap());
        assert!(!projects.set_price(404, 450).await.unwrap());
        assert_eq!(
            projects
                .get_by_id(project.id)
                .await
                .unwrap()
                .unwrap()
                .total_price,
            Some(450)
        );
    }
}
