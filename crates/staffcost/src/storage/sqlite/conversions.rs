//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use staffcost_core::staffing::{Project, ProjectRole, Role};

/// Convert a SQLite row to a Project.
///
/// Expected columns: id, name, coefficient, total_price, created_at
pub fn row_to_project(row: &Row) -> rusqlite::Result<Project> {
    let created_at: String = row.get(4)?;

    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        coefficient: row.get(2)?,
        total_price: row.get(3)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Convert a SQLite row to a Role.
///
/// Expected columns: id, name, default_rate
pub fn row_to_role(row: &Row) -> rusqlite::Result<Role> {
    Ok(Role {
        id: row.get(0)?,
        name: row.get(1)?,
        default_rate: row.get(2)?,
    })
}

/// Convert a SQLite row to a ProjectRole.
///
/// Expected columns: id, project_id, role_id, count, custom_rate
pub fn row_to_project_role(row: &Row) -> rusqlite::Result<ProjectRole> {
    Ok(ProjectRole {
        id: row.get(0)?,
        project_id: row.get(1)?,
        role_id: row.get(2)?,
        count: row.get(3)?,
        custom_rate: row.get(4)?,
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
