//! Role repository.
//!
//! The full role list is cached under one fixed key. Every write drops
//! that key; single-role lookups always go to the store.

use std::sync::Arc;

use staffcost_core::cache::{deserialize_roles, serialize_roles, CacheKeys};
use staffcost_core::staffing::{
    validate_role, validate_role_update, CreateRoleRequest, Role, UpdateRoleRequest,
};
use staffcost_core::storage::{RepositoryError, Result, RoleStore};

use crate::cache::FailSafeCache;

#[derive(Clone)]
pub struct RoleRepository {
    store: Arc<dyn RoleStore>,
    cache: FailSafeCache,
    keys: Arc<CacheKeys>,
}

impl RoleRepository {
    pub fn new(store: Arc<dyn RoleStore>, cache: FailSafeCache, keys: Arc<CacheKeys>) -> Self {
        Self { store, cache, keys }
    }

    /// Creates a role and invalidates the cached role list.
    pub async fn create(&self, request: CreateRoleRequest) -> Result<Role> {
        let role = request.into_role();
        validate_role(&role)?;

        let role = self.store.insert_role(&role).await?;
        self.invalidate_list().await;

        tracing::debug!(role_id = role.id, name = %role.name, "Role created");
        Ok(role)
    }

    /// Store-direct lookup. Single roles are never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Role>> {
        self.store.get_role(id).await
    }

    /// Existence check used to validate foreign keys. Never consults the cache.
    pub async fn is_role(&self, id: i64) -> Result<bool> {
        Ok(self.store.get_role(id).await?.is_some())
    }

    /// Lists all roles, read-through.
    pub async fn list(&self) -> Result<Vec<Role>> {
        let cache_key = self.keys.roles();

        if let Some(bytes) = self.cache.get(cache_key).await {
            match deserialize_roles(&bytes) {
                Ok(roles) => {
                    tracing::trace!(key = cache_key, "Cache hit for role list");
                    return Ok(roles);
                }
                Err(err) => {
                    tracing::warn!(key = cache_key, error = %err, "Cached role list is unreadable");
                }
            }
        }

        tracing::trace!(key = cache_key, "Cache miss for role list");
        let roles = self.store.list_roles().await?;

        match serialize_roles(&roles) {
            Ok(bytes) => self.cache.set(cache_key, &bytes).await,
            Err(err) => tracing::warn!(error = %err, "Failed to serialize role list"),
        }

        Ok(roles)
    }

    /// Applies only the fields present in `update`, then invalidates the role list.
    pub async fn update(&self, id: i64, update: &UpdateRoleRequest) -> Result<Role> {
        validate_role_update(update)?;

        let role = self
            .store
            .update_role(id, update)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Role", id))?;
        self.invalidate_list().await;

        tracing::debug!(role_id = id, "Role updated");
        Ok(role)
    }

    /// Deletes a role, then invalidates the role list.
    ///
    /// Assignments that still reference the role are left alone; the cost
    /// calculation skips them.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store
            .delete_role(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Role", id))?;
        self.invalidate_list().await;

        tracing::debug!(role_id = id, "Role deleted");
        Ok(())
    }

    async fn invalidate_list(&self) {
        self.cache.delete(self.keys.roles()).await;
    }
}
