//! Pure functions for serializing/deserializing cache payloads.
//!
//! Payloads are field-named JSON, the same shape the repositories return, so
//! cached values stay readable by any client sharing the cache.

use crate::staffing::{ProjectRole, Role};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes the role list to JSON bytes.
pub fn serialize_roles(roles: &[Role]) -> Result<Vec<u8>> {
    serde_json::to_vec(roles).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a role list.
pub fn deserialize_roles(bytes: &[u8]) -> Result<Vec<Role>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a single project role to JSON bytes.
pub fn serialize_project_role(project_role: &ProjectRole) -> Result<Vec<u8>> {
    serde_json::to_vec(project_role)
        .map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a project role.
pub fn deserialize_project_role(bytes: &[u8]) -> Result<ProjectRole> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a project's role list to JSON bytes.
pub fn serialize_project_roles(project_roles: &[ProjectRole]) -> Result<Vec<u8>> {
    serde_json::to_vec(project_roles)
        .map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a project's role list.
pub fn deserialize_project_roles(bytes: &[u8]) -> Result<Vec<ProjectRole>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
