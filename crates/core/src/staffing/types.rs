use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project whose staffing cost is being estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Multiplier applied to the base cost of the project's team.
    pub coefficient: f64,
    /// Last computed cost. Written by the cost calculation (or a manual override).
    #[serde(default)]
    pub total_price: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project that has not been stored yet (id 0, price 0).
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            coefficient,
            total_price: Some(0),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific ID for this project (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A role that can be staffed on projects, with its default rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub default_rate: i64,
}

impl Role {
    /// Creates a role that has not been stored yet (id 0).
    pub fn new(name: impl Into<String>, default_rate: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            default_rate,
        }
    }

    /// Sets a specific ID for this role (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Assignment of a role to a project: how many people, at which rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRole {
    pub id: i64,
    pub project_id: i64,
    pub role_id: i64,
    /// Number of people in this role on the project.
    pub count: i64,
    /// Overrides the role's default rate for this project when set.
    pub custom_rate: Option<i64>,
}

impl ProjectRole {
    /// Creates an assignment that has not been stored yet (id 0).
    pub fn new(project_id: i64, role_id: i64, count: i64) -> Self {
        Self {
            id: 0,
            project_id,
            role_id,
            count,
            custom_rate: None,
        }
    }

    /// Sets the project-specific rate.
    pub fn with_custom_rate(mut self, rate: i64) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    /// Sets a specific ID for this assignment (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// The rate this assignment is billed at: the custom rate if set,
    /// otherwise the role's default rate.
    pub fn effective_rate(&self, role: &Role) -> i64 {
        self.custom_rate.unwrap_or(role.default_rate)
    }
}

/// Result of a project cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub project: Project,
    pub total_price: i64,
}
