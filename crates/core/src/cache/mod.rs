mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    CacheKeys, DEFAULT_PROJECT_ROLES_PREFIX, DEFAULT_PROJECT_ROLE_PREFIX, DEFAULT_ROLES_KEY,
};
pub use serialization::{
    deserialize_project_role, deserialize_project_roles, deserialize_roles,
    serialize_project_role, serialize_project_roles, serialize_roles, SerializationError,
};
pub use traits::Cache;
