//! Entity repositories.
//!
//! Each repository composes a store and, for roles and project roles, the
//! fail-safe cache:
//! - **Reads**: check the cache first, on miss fetch from the store and populate the cache
//! - **Writes**: persist to the store, then invalidate every affected cache key
//!
//! Invalidation runs after the store call returns, so a failed write never
//! touches the cache and a failed invalidation never undoes a write.

mod project;
mod project_role;
mod role;

pub use project::ProjectRepository;
pub use project_role::ProjectRoleRepository;
pub use role::RoleRepository;
