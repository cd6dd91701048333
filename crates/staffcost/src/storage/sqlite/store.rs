//! SQLite store implementation.
//!
//! Implements the store traits from `staffcost_core::storage` using SQLite.
//! Every trait method is one `Connection::call`; the read-modify-write
//! operations run inside a transaction.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use staffcost_core::staffing::{
    Project, ProjectRole, Role, UpdateProjectRequest, UpdateProjectRoleRequest, UpdateRoleRequest,
};
use staffcost_core::storage::{ProjectRoleStore, ProjectStore, RepositoryError, Result, RoleStore};

use super::conversions::{format_datetime, row_to_project, row_to_project_role, row_to_role};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based store implementation.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ProjectStore implementation
// ============================================================================

#[async_trait]
impl ProjectStore for SqliteStore {
    async fn insert_project(&self, project: &Project) -> Result<Project> {
        let name = project.name.clone();
        let coefficient = project.coefficient;
        let total_price = project.total_price;
        let created_at = format_datetime(&project.created_at);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_PROJECT,
                    rusqlite::params![name, coefficient, total_price, created_at],
                    row_to_project,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_PROJECT_BY_ID, [id], row_to_project)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PROJECTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_project).map_err(wrap_err)?;

                let mut projects = Vec::new();
                for row_result in rows {
                    projects.push(row_result.map_err(wrap_err)?);
                }
                Ok(projects)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }

    async fn update_project(
        &self,
        id: i64,
        update: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        let update = update.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_PROJECT_BY_ID, [id], row_to_project)
                    .optional()
                    .map_err(wrap_err)?;
                let Some(mut project) = current else {
                    return Ok(None);
                };

                update.apply_to(&mut project);
                tx.execute(
                    schema::UPDATE_PROJECT,
                    rusqlite::params![
                        project.id,
                        project.name,
                        project.coefficient,
                        project.total_price
                    ],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(Some(project))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }

    async fn delete_project(&self, id: i64) -> Result<Option<Project>> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_PROJECT_BY_ID, [id], row_to_project)
                    .optional()
                    .map_err(wrap_err)?;
                if current.is_some() {
                    tx.execute(schema::DELETE_PROJECT, [id]).map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(current)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }

    async fn set_project_price(&self, id: i64, total_price: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_PROJECT_PRICE, [id, total_price])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project"))
    }
}

// ============================================================================
// RoleStore implementation
// ============================================================================

#[async_trait]
impl RoleStore for SqliteStore {
    async fn insert_role(&self, role: &Role) -> Result<Role> {
        let name = role.name.clone();
        let default_rate = role.default_rate;

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_ROLE,
                    rusqlite::params![name, default_rate],
                    row_to_role,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Role"))
    }

    async fn get_role(&self, id: i64) -> Result<Option<Role>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ROLE_BY_ID, [id], row_to_role)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Role"))
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ROLES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_role).map_err(wrap_err)?;

                let mut roles = Vec::new();
                for row_result in rows {
                    roles.push(row_result.map_err(wrap_err)?);
                }
                Ok(roles)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Role"))
    }

    async fn update_role(&self, id: i64, update: &UpdateRoleRequest) -> Result<Option<Role>> {
        let update = update.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_ROLE_BY_ID, [id], row_to_role)
                    .optional()
                    .map_err(wrap_err)?;
                let Some(mut role) = current else {
                    return Ok(None);
                };

                update.apply_to(&mut role);
                tx.execute(
                    schema::UPDATE_ROLE,
                    rusqlite::params![role.id, role.name, role.default_rate],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(Some(role))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Role"))
    }

    async fn delete_role(&self, id: i64) -> Result<Option<Role>> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_ROLE_BY_ID, [id], row_to_role)
                    .optional()
                    .map_err(wrap_err)?;
                if current.is_some() {
                    tx.execute(schema::DELETE_ROLE, [id]).map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(current)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Role"))
    }
}

// ============================================================================
// ProjectRoleStore implementation
// ============================================================================

#[async_trait]
impl ProjectRoleStore for SqliteStore {
    async fn insert_project_role(&self, project_role: &ProjectRole) -> Result<ProjectRole> {
        let project_id = project_role.project_id;
        let role_id = project_role.role_id;
        let count = project_role.count;
        let custom_rate = project_role.custom_rate;

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_PROJECT_ROLE,
                    rusqlite::params![project_id, role_id, count, custom_rate],
                    row_to_project_role,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ProjectRole"))
    }

    async fn get_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_PROJECT_ROLE_BY_ID, [id], row_to_project_role)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ProjectRole"))
    }

    async fn list_project_roles_by_project(&self, project_id: i64) -> Result<Vec<ProjectRole>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PROJECT_ROLES_BY_PROJECT)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([project_id], row_to_project_role)
                    .map_err(wrap_err)?;

                let mut project_roles = Vec::new();
                for row_result in rows {
                    project_roles.push(row_result.map_err(wrap_err)?);
                }
                Ok(project_roles)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ProjectRole"))
    }

    async fn update_project_role(
        &self,
        id: i64,
        update: &UpdateProjectRoleRequest,
    ) -> Result<Option<ProjectRole>> {
        let update = update.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_PROJECT_ROLE_BY_ID, [id], row_to_project_role)
                    .optional()
                    .map_err(wrap_err)?;
                let Some(mut assignment) = current else {
                    return Ok(None);
                };

                update.apply_to(&mut assignment);
                tx.execute(
                    schema::UPDATE_PROJECT_ROLE,
                    rusqlite::params![assignment.id, assignment.count, assignment.custom_rate],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(Some(assignment))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ProjectRole"))
    }

    async fn delete_project_role(&self, id: i64) -> Result<Option<ProjectRole>> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current = tx
                    .query_row(schema::SELECT_PROJECT_ROLE_BY_ID, [id], row_to_project_role)
                    .optional()
                    .map_err(wrap_err)?;
                if current.is_some() {
                    tx.execute(schema::DELETE_PROJECT_ROLE, [id])
                        .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(current)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ProjectRole"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (SqliteStore, Project, Role) {
        let store = SqliteStore::new_in_memory().await.unwrap();
        let project = store
            .insert_project(&Project::new("Website", 1.5))
            .await
            .unwrap();
        let role = store.insert_role(&Role::new("Developer", 100)).await.unwrap();
        (store, project, role)
    }

    #[tokio::test]
    async fn test_insert_and_get_project() {
        let (store, project, _) = seeded().await;

        assert_eq!(project.id, 1);
        assert_eq!(project.total_price, Some(0));

        let fetched = store.get_project(project.id).await.unwrap().unwrap();
        assert_eq!(fetched, project);
    }

    #[tokio::test]
    async fn test_get_missing_rows() {
        let store = SqliteStore::new_in_memory().await.unwrap();

        assert!(store.get_project(1).await.unwrap().is_none());
        assert!(store.get_role(1).await.unwrap().is_none());
        assert!(store.get_project_role(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_roles_ordered_by_id() {
        let store = SqliteStore::new_in_memory().await.unwrap();
        for name in ["c", "a", "b"] {
            store.insert_role(&Role::new(name, 1)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_roles()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_partial_update_project() {
        let (store, project, _) = seeded().await;

        let updated = store
            .update_project(project.id, &UpdateProjectRequest::new().with_coefficient(2.0))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Website");
        assert_eq!(updated.coefficient, 2.0);
        assert_eq!(store.get_project(project.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = SqliteStore::new_in_memory().await.unwrap();

        let result = store
            .update_role(5, &UpdateRoleRequest::new().with_default_rate(1))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_project_role_lifecycle() {
        let (store, project, role) = seeded().await;

        let assignment = store
            .insert_project_role(&ProjectRole::new(project.id, role.id, 3))
            .await
            .unwrap();
        assert_eq!(assignment.id, 1);

        let updated = store
            .update_project_role(
                assignment.id,
                &UpdateProjectRoleRequest::new().with_custom_rate(120),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.count, 3);
        assert_eq!(updated.custom_rate, Some(120));

        let listed = store
            .list_project_roles_by_project(project.id)
            .await
            .unwrap();
        assert_eq!(listed, vec![updated.clone()]);

        let removed = store.delete_project_role(assignment.id).await.unwrap();
        assert_eq!(removed, Some(updated));
        assert!(store
            .list_project_roles_by_project(project.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_project_role_insert_requires_references() {
        let (store, project, role) = seeded().await;

        let missing_role = store
            .insert_project_role(&ProjectRole::new(project.id, 99, 1))
            .await;
        let missing_project = store
            .insert_project_role(&ProjectRole::new(99, role.id, 1))
            .await;

        assert!(matches!(missing_role, Err(RepositoryError::InvalidData(_))));
        assert!(matches!(missing_project, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_project_delete_blocked_while_referenced() {
        let (store, project, role) = seeded().await;
        store
            .insert_project_role(&ProjectRole::new(project.id, role.id, 2))
            .await
            .unwrap();

        let result = store.delete_project(project.id).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(store.get_project(project.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_role_delete_leaves_assignments_dangling() {
        let (store, project, role) = seeded().await;
        store
            .insert_project_role(&ProjectRole::new(project.id, role.id, 2))
            .await
            .unwrap();

        let removed = store.delete_role(role.id).await.unwrap();

        assert_eq!(removed, Some(role));
        assert_eq!(
            store
                .list_project_roles_by_project(project.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let store = SqliteStore::new_in_memory().await.unwrap();

        assert!(store.delete_project(1).await.unwrap().is_none());
        assert!(store.delete_role(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_project_price() {
        let (store, project, _) = seeded().await;

        assert!(store.set_project_price(project.id, 450).await.unwrap());
        assert!(!store.set_project_price(404, 450).await.unwrap());
        assert_eq!(
            store
                .get_project(project.id)
                .await
                .unwrap()
                .unwrap()
                .total_price,
            Some(450)
        );
    }
}
