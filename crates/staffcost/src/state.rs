//! Application state.
//!
//! Wires one store backend and one cache backend, both chosen by feature
//! flags, into the repositories and the cost service shared by all
//! request handlers.

use std::sync::Arc;

use staffcost_core::cache::Cache;
use staffcost_core::storage::{ProjectRoleStore, ProjectStore, RoleStore};

use crate::cache::FailSafeCache;
use crate::config::Config;
use crate::costing::CostService;
use crate::repositories::{ProjectRepository, ProjectRoleRepository, RoleRepository};

/// Shared application state.
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectRepository,
    pub roles: RoleRepository,
    pub project_roles: ProjectRoleRepository,
    pub costs: CostService,
}

impl AppState {
    /// Builds the repositories on top of a store and a raw cache client.
    pub fn build<S>(store: Arc<S>, cache: Arc<dyn Cache>, config: &Config) -> Self
    where
        S: ProjectStore + RoleStore + ProjectRoleStore + 'static,
    {
        let cache =
            FailSafeCache::new(cache, config.cache_ttl()).with_timeout(config.redis_timeout());
        let keys = Arc::new(config.cache_keys());

        let projects = ProjectRepository::new(store.clone());
        let roles = RoleRepository::new(store.clone(), cache.clone(), keys.clone());
        let project_roles =
            ProjectRoleRepository::new(store, roles.clone(), projects.clone(), cache, keys);
        let costs = CostService::new(projects.clone(), roles.clone(), project_roles.clone());

        Self {
            projects,
            roles,
            project_roles,
            costs,
        }
    }

    /// Creates AppState with the store and cache selected at compile time.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let cache = open_cache(config).await?;

        #[cfg(feature = "inmemory")]
        let store = Arc::new(crate::storage::InMemoryStore::new());

        #[cfg(feature = "sqlite")]
        let store = Arc::new(crate::storage::SqliteStore::new(&config.sqlite_path).await?);

        Ok(Self::build(store, cache, config))
    }
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(crate::cache::MemoryCache::new(
        config.cache_max_entries,
    )))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::info!(url = %config.redis_url, "Connecting to Redis cache");
    let cache = crate::cache::RedisCache::new(&config.redis_url, config.redis_timeout()).await?;
    Ok(Arc::new(cache))
}

#[cfg(test)]
impl AppState {
    /// In-memory store and mock cache, for handler tests.
    pub fn for_tests() -> Self {
        let config = Config {
            cache_ttl_seconds: 300,
            cache_max_entries: 100,
            cache_roles_key: staffcost_core::cache::DEFAULT_ROLES_KEY.to_string(),
            cache_project_roles_prefix: staffcost_core::cache::DEFAULT_PROJECT_ROLES_PREFIX
                .to_string(),
            cache_project_role_prefix: staffcost_core::cache::DEFAULT_PROJECT_ROLE_PREFIX
                .to_string(),
            sqlite_path: ":memory:".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            redis_timeout_ms: 500,
        };
        Self::build(
            Arc::new(crate::storage::InMemoryStore::new()),
            Arc::new(crate::testing::MockCache::new()),
            &config,
        )
    }
}
