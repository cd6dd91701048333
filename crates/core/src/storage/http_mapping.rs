//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// The absent-row family (`NotFound`, `MissingReference`, `NoProjectRoles`)
/// is a 404, rejected input is a 400, an unreachable store is a 503 and
/// anything else the store reports is a 500.
///
/// # Examples
///
/// ```
/// use staffcost_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NoProjectRoles { project_id: 42 };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        e if e.is_not_found() => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        _ => 500,
    }
}
