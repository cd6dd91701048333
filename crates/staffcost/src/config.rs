use std::{env, time::Duration};

use staffcost_core::cache::{
    CacheKeys, DEFAULT_PROJECT_ROLES_PREFIX, DEFAULT_PROJECT_ROLE_PREFIX, DEFAULT_ROLES_KEY,
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` cache feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Key holding the full role list (default: "roles:all")
    pub cache_roles_key: String,
    /// Prefix of a project's role list key (default: "project_roles:")
    pub cache_project_roles_prefix: String,
    /// Prefix of a single project role key (default: "project_role:")
    pub cache_project_role_prefix: String,
    /// Path to SQLite database file (default: "staffcost.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Upper bound for connecting to and each round trip with the cache (default: 500)
    pub redis_timeout_ms: u64,
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn string_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_ROLES_KEY` - Role list key (default: "roles:all")
    /// - `CACHE_PROJECT_ROLES_PREFIX` - Project role list prefix (default: "project_roles:")
    /// - `CACHE_PROJECT_ROLE_PREFIX` - Project role prefix (default: "project_role:")
    /// - `SQLITE_PATH` - SQLite database path (default: "staffcost.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `REDIS_TIMEOUT_MS` - Cache connection/response timeout (default: 500)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: parse_or("CACHE_TTL_SECONDS", 300),
            cache_max_entries: parse_or("CACHE_MAX_ENTRIES", 10_000),
            cache_roles_key: string_or("CACHE_ROLES_KEY", DEFAULT_ROLES_KEY),
            cache_project_roles_prefix: string_or(
                "CACHE_PROJECT_ROLES_PREFIX",
                DEFAULT_PROJECT_ROLES_PREFIX,
            ),
            cache_project_role_prefix: string_or(
                "CACHE_PROJECT_ROLE_PREFIX",
                DEFAULT_PROJECT_ROLE_PREFIX,
            ),
            sqlite_path: string_or("SQLITE_PATH", "staffcost.db"),
            redis_url: string_or("REDIS_URL", "redis://localhost:6379"),
            redis_timeout_ms: parse_or("REDIS_TIMEOUT_MS", 500),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the cache timeout as a Duration.
    pub fn redis_timeout(&self) -> Duration {
        Duration::from_millis(self.redis_timeout_ms)
    }

    /// Builds the cache key scheme from the configured key and prefixes.
    pub fn cache_keys(&self) -> CacheKeys {
        CacheKeys::new(
            self.cache_roles_key.clone(),
            self.cache_project_roles_prefix.clone(),
            self.cache_project_role_prefix.clone(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            cache_ttl_seconds: 600,
            cache_max_entries: 10_000,
            cache_roles_key: "staff:roles".to_string(),
            cache_project_roles_prefix: "staff:pr-list:".to_string(),
            cache_project_role_prefix: "staff:pr:".to_string(),
            sqlite_path: "test.db".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            redis_timeout_ms: 250,
        }
    }

    #[test]
    fn test_duration_conversions() {
        let config = config();

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.redis_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_cache_keys_follow_configuration() {
        let keys = config().cache_keys();

        assert_eq!(keys.roles(), "staff:roles");
        assert_eq!(keys.project_roles(7), "staff:pr-list:7");
        assert_eq!(keys.project_role(9), "staff:pr:9");
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        for name in [
            "CACHE_TTL_SECONDS",
            "CACHE_MAX_ENTRIES",
            "CACHE_ROLES_KEY",
            "CACHE_PROJECT_ROLES_PREFIX",
            "CACHE_PROJECT_ROLE_PREFIX",
            "SQLITE_PATH",
            "REDIS_URL",
            "REDIS_TIMEOUT_MS",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();

        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.sqlite_path, "staffcost.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.redis_timeout_ms, 500);
        assert_eq!(config.cache_keys(), CacheKeys::default());
    }
}
