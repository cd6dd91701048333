//! Cache key scheme.
//!
//! Three kinds of entries are cached:
//!
//! - the full role list, under one fixed key
//! - a project's role assignments, under `<project_roles_prefix><project_id>`
//! - a single assignment, under `<project_role_prefix><project_role_id>`
//!
//! The fixed key and both prefixes come from deployment configuration so
//! that a cache already populated by another deployment stays readable.

/// Default key holding the full role list.
pub const DEFAULT_ROLES_KEY: &str = "roles:all";
/// Default prefix for a project's role list.
pub const DEFAULT_PROJECT_ROLES_PREFIX: &str = "project_roles:";
/// Default prefix for a single project role.
pub const DEFAULT_PROJECT_ROLE_PREFIX: &str = "project_role:";

/// Builds cache keys from the configured key and prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    roles_key: String,
    project_roles_prefix: String,
    project_role_prefix: String,
}

impl CacheKeys {
    pub fn new(
        roles_key: impl Into<String>,
        project_roles_prefix: impl Into<String>,
        project_role_prefix: impl Into<String>,
    ) -> Self {
        Self {
            roles_key: roles_key.into(),
            project_roles_prefix: project_roles_prefix.into(),
            project_role_prefix: project_role_prefix.into(),
        }
    }

    /// Returns the cache key for the full role list.
    pub fn roles(&self) -> &str {
        &self.roles_key
    }

    /// Returns the cache key for all role assignments of a project.
    pub fn project_roles(&self, project_id: i64) -> String {
        format!("{}{}", self.project_roles_prefix, project_id)
    }

    /// Returns the cache key for a single role assignment.
    pub fn project_role(&self, project_role_id: i64) -> String {
        format!("{}{}", self.project_role_prefix, project_role_id)
    }
}

impl Default for CacheKeys {
    fn default() -> Self {
        Self::new(
            DEFAULT_ROLES_KEY,
            DEFAULT_PROJECT_ROLES_PREFIX,
            DEFAULT_PROJECT_ROLE_PREFIX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = CacheKeys::default();

        assert_eq!(keys.roles(), "roles:all");
        assert_eq!(keys.project_roles(42), "project_roles:42");
        assert_eq!(keys.project_role(7), "project_role:7");
    }

    #[test]
    fn test_keys_are_prefix_concatenation() {
        let keys = CacheKeys::new("all_roles", "project_roles_", "project_role_");

        assert_eq!(keys.roles(), "all_roles");
        assert_eq!(keys.project_roles(3), "project_roles_3");
        assert_eq!(keys.project_role(3), "project_role_3");
    }

    #[test]
    fn test_list_and_item_keys_do_not_collide() {
        let keys = CacheKeys::default();

        assert_ne!(keys.project_roles(1), keys.project_role(1));
    }
}
