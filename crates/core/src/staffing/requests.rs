//! Request types for staffing operations.
//!
//! Create requests carry every required field. Update requests are sparse:
//! a field left as `None` is not touched when the update is applied.

use serde::{Deserialize, Serialize};

use super::types::{Project, ProjectRole, Role};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub coefficient: f64,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            name: name.into(),
            coefficient,
        }
    }

    /// Convert into an unsaved Project.
    pub fn into_project(self) -> Project {
        Project::new(self.name, self.coefficient)
    }
}

/// Request payload for updating a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient: Option<f64>,
    /// Manual price override. The cost calculation overwrites it on its next run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<i64>,
}

impl UpdateProjectRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = Some(coefficient);
        self
    }

    pub fn with_total_price(mut self, total_price: i64) -> Self {
        self.total_price = Some(total_price);
        self
    }

    /// Apply updates to an existing project.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(coefficient) = self.coefficient {
            project.coefficient = coefficient;
        }
        if let Some(total_price) = self.total_price {
            project.total_price = Some(total_price);
        }
    }
}

/// Request payload for creating a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub default_rate: i64,
}

impl CreateRoleRequest {
    pub fn new(name: impl Into<String>, default_rate: i64) -> Self {
        Self {
            name: name.into(),
            default_rate,
        }
    }

    /// Convert into an unsaved Role.
    pub fn into_role(self) -> Role {
        Role::new(self.name, self.default_rate)
    }
}

/// Request payload for updating a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<i64>,
}

impl UpdateRoleRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default_rate(mut self, default_rate: i64) -> Self {
        self.default_rate = Some(default_rate);
        self
    }

    /// Apply updates to an existing role.
    pub fn apply_to(&self, role: &mut Role) {
        if let Some(name) = &self.name {
            role.name = name.clone();
        }
        if let Some(default_rate) = self.default_rate {
            role.default_rate = default_rate;
        }
    }
}

/// Request payload for assigning a role to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRoleRequest {
    pub project_id: i64,
    pub role_id: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<i64>,
}

impl CreateProjectRoleRequest {
    pub fn new(project_id: i64, role_id: i64, count: i64) -> Self {
        Self {
            project_id,
            role_id,
            count,
            custom_rate: None,
        }
    }

    pub fn with_custom_rate(mut self, rate: i64) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    /// Convert into an unsaved ProjectRole.
    pub fn into_project_role(self) -> ProjectRole {
        let mut assignment = ProjectRole::new(self.project_id, self.role_id, self.count);
        assignment.custom_rate = self.custom_rate;
        assignment
    }
}

/// Request payload for updating a project-role assignment.
///
/// Each field is checked independently, so an update that only changes
/// `count` never clears an existing custom rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRoleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl UpdateProjectRoleRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_rate(mut self, rate: i64) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Apply updates to an existing assignment.
    pub fn apply_to(&self, assignment: &mut ProjectRole) {
        if let Some(rate) = self.custom_rate {
            assignment.custom_rate = Some(rate);
        }
        if let Some(count) = self.count {
            assignment.count = count;
        }
    }
}
