use thiserror::Error;

use crate::staffing::StaffingError;

/// Errors that can occur during repository operations.
///
/// Store backends only produce the connection, query, serialization and
/// invalid-data variants. The repositories add the structured failures:
/// a missing row, a missing foreign-key target, or a project with nothing
/// to price.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("Role or Project not found (project {project_id}, role {role_id})")]
    MissingReference { project_id: i64, role_id: i64 },
    #[error("No roles found for project {project_id}")]
    NoProjectRoles { project_id: i64 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// Returns true for the "row absent" family of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::MissingReference { .. } | Self::NoProjectRoles { .. }
        )
    }
}

impl From<StaffingError> for RepositoryError {
    fn from(err: StaffingError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
