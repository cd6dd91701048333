//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `project_roles.project_id` is a real foreign key, so a project cannot be
/// deleted while assignments reference it. `role_id` is only checked on
/// insert by a trigger: deleting a role leaves its assignments in place and
/// the cost calculation skips them.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Projects table
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    coefficient REAL NOT NULL,
    total_price INTEGER DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Roles table
CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    default_rate INTEGER NOT NULL
);

-- Project role assignments table
CREATE TABLE IF NOT EXISTS project_roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    role_id INTEGER NOT NULL,
    count INTEGER NOT NULL DEFAULT 0,
    custom_rate INTEGER,
    FOREIGN KEY (project_id) REFERENCES projects(id)
);

CREATE TRIGGER IF NOT EXISTS project_roles_role_exists
BEFORE INSERT ON project_roles
WHEN NOT EXISTS (SELECT 1 FROM roles WHERE id = NEW.role_id)
BEGIN
    SELECT RAISE(ABORT, 'role does not exist');
END;

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_project_roles_project_id ON project_roles(project_id);
"#;

// ============================================================================
// Project queries
// ============================================================================

pub const INSERT_PROJECT: &str = r#"
INSERT INTO projects (name, coefficient, total_price, created_at)
VALUES (?1, ?2, ?3, ?4)
RETURNING id, name, coefficient, total_price, created_at
"#;

pub const SELECT_PROJECT_BY_ID: &str = r#"
SELECT id, name, coefficient, total_price, created_at
FROM projects
WHERE id = ?1
"#;

pub const SELECT_PROJECTS: &str = r#"
SELECT id, name, coefficient, total_price, created_at
FROM projects
ORDER BY id
"#;

pub const UPDATE_PROJECT: &str = r#"
UPDATE projects
SET name = ?2, coefficient = ?3, total_price = ?4
WHERE id = ?1
"#;

pub const UPDATE_PROJECT_PRICE: &str = r#"
UPDATE projects
SET total_price = ?2
WHERE id = ?1
"#;

pub const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";

// ============================================================================
// Role queries
// ============================================================================

pub const INSERT_ROLE: &str = r#"
INSERT INTO roles (name, default_rate)
VALUES (?1, ?2)
RETURNING id, name, default_rate
"#;

pub const SELECT_ROLE_BY_ID: &str = r#"
SELECT id, name, default_rate
FROM roles
WHERE id = ?1
"#;

pub const SELECT_ROLES: &str = r#"
SELECT id, name, default_rate
FROM roles
ORDER BY id
"#;

pub const UPDATE_ROLE: &str = r#"
UPDATE roles
SET name = ?2, default_rate = ?3
WHERE id = ?1
"#;

pub const DELETE_ROLE: &str = "DELETE FROM roles WHERE id = ?1";

// ============================================================================
// Project role queries
// ============================================================================

pub const INSERT_PROJECT_ROLE: &str = r#"
INSERT INTO project_roles (project_id, role_id, count, custom_rate)
VALUES (?1, ?2, ?3, ?4)
RETURNING id, project_id, role_id, count, custom_rate
"#;

pub const SELECT_PROJECT_ROLE_BY_ID: &str = r#"
SELECT id, project_id, role_id, count, custom_rate
FROM project_roles
WHERE id = ?1
"#;

pub const SELECT_PROJECT_ROLES_BY_PROJECT: &str = r#"
SELECT id, project_id, role_id, count, custom_rate
FROM project_roles
WHERE project_id = ?1
ORDER BY id
"#;

pub const UPDATE_PROJECT_ROLE: &str = r#"
UPDATE project_roles
SET count = ?2, custom_rate = ?3
WHERE id = ?1
"#;

pub const DELETE_PROJECT_ROLE: &str = "DELETE FROM project_roles WHERE id = ?1";
