//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `staffcost_core::storage`.

use staffcost_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Any constraint violation (foreign key, trigger, NOT NULL) → `RepositoryError::InvalidData`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - Column conversion failures → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            let detail = message.as_deref().unwrap_or("constraint violation");
            RepositoryError::InvalidData(format!("{entity_type}: {detail}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => {
            RepositoryError::Serialization(format!("{entity_type}: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// Extracts the inner `rusqlite::Error` if present, otherwise maps to a
/// generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
