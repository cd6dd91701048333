use super::error::StaffingError;
use super::requests::{UpdateProjectRequest, UpdateProjectRoleRequest, UpdateRoleRequest};
use super::types::{Project, ProjectRole, Role};

/// Maximum length of project and role names.
pub const MAX_NAME_LEN: usize = 255;

fn validate_name_length(name: &str) -> Result<(), StaffingError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StaffingError::NameTooLong);
    }
    Ok(())
}

/// Project names must be non-empty. Role names only have a length limit.
fn validate_project_name(name: &str) -> Result<(), StaffingError> {
    if name.is_empty() {
        return Err(StaffingError::EmptyName);
    }
    validate_name_length(name)
}

fn validate_non_negative(field: &'static str, value: i64) -> Result<(), StaffingError> {
    if value < 0 {
        return Err(StaffingError::Negative { field });
    }
    Ok(())
}

/// Validates a project before creation or update.
pub fn validate_project(project: &Project) -> Result<(), StaffingError> {
    validate_project_name(&project.name)?;
    validate_coefficient(project.coefficient)?;
    if let Some(total_price) = project.total_price {
        validate_non_negative("total_price", total_price)?;
    }
    Ok(())
}

/// Validates a role before creation or update.
pub fn validate_role(role: &Role) -> Result<(), StaffingError> {
    validate_name_length(&role.name)?;
    validate_non_negative("default_rate", role.default_rate)
}

/// Validates a project-role assignment before creation or update.
pub fn validate_project_role(assignment: &ProjectRole) -> Result<(), StaffingError> {
    validate_non_negative("count", assignment.count)?;
    if let Some(rate) = assignment.custom_rate {
        validate_non_negative("custom_rate", rate)?;
    }
    Ok(())
}

fn validate_coefficient(coefficient: f64) -> Result<(), StaffingError> {
    if !coefficient.is_finite() || coefficient < 0.0 {
        return Err(StaffingError::InvalidCoefficient);
    }
    Ok(())
}

/// Validates the fields present in a project update.
pub fn validate_project_update(update: &UpdateProjectRequest) -> Result<(), StaffingError> {
    if let Some(name) = &update.name {
        validate_project_name(name)?;
    }
    if let Some(coefficient) = update.coefficient {
        validate_coefficient(coefficient)?;
    }
    if let Some(total_price) = update.total_price {
        validate_non_negative("total_price", total_price)?;
    }
    Ok(())
}

/// Validates the fields present in a role update.
pub fn validate_role_update(update: &UpdateRoleRequest) -> Result<(), StaffingError> {
    if let Some(name) = &update.name {
        validate_name_length(name)?;
    }
    if let Some(default_rate) = update.default_rate {
        validate_non_negative("default_rate", default_rate)?;
    }
    Ok(())
}

/// Validates the fields present in a project-role update.
pub fn validate_project_role_update(
    update: &UpdateProjectRoleRequest,
) -> Result<(), StaffingError> {
    if let Some(count) = update.count {
        validate_non_negative("count", count)?;
    }
    if let Some(rate) = update.custom_rate {
        validate_non_negative("custom_rate", rate)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project() {
        assert!(validate_project(&Project::new("Website", 1.5)).is_ok());
        assert!(validate_project(&Project::new("Free", 0.0)).is_ok());
    }

    #[test]
    fn test_project_name_must_not_be_empty() {
        assert_eq!(
            validate_project(&Project::new("", 1.0)),
            Err(StaffingError::EmptyName)
        );
        assert!(validate_project(&Project::new("   ", 1.0)).is_ok());
    }

    #[test]
    fn test_role_name_may_be_empty() {
        assert!(validate_role(&Role::new("", 100)).is_ok());
        assert!(validate_role(&Role::new("  ", 100)).is_ok());
        assert!(validate_role_update(&UpdateRoleRequest::new().with_name("")).is_ok());
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = "a".repeat(MAX_NAME_LEN);
        let over_limit = "a".repeat(MAX_NAME_LEN + 1);

        assert!(validate_role(&Role::new(at_limit, 1)).is_ok());
        assert_eq!(
            validate_role(&Role::new(over_limit, 1)),
            Err(StaffingError::NameTooLong)
        );
    }

    #[test]
    fn test_project_with_bad_coefficient() {
        assert_eq!(
            validate_project(&Project::new("Website", -0.5)),
            Err(StaffingError::InvalidCoefficient)
        );
        assert_eq!(
            validate_project(&Project::new("Website", f64::NAN)),
            Err(StaffingError::InvalidCoefficient)
        );
        assert_eq!(
            validate_project(&Project::new("Website", f64::INFINITY)),
            Err(StaffingError::InvalidCoefficient)
        );
    }

    #[test]
    fn test_role_with_negative_rate() {
        assert_eq!(
            validate_role(&Role::new("Dev", -1)),
            Err(StaffingError::Negative {
                field: "default_rate"
            })
        );
    }

    #[test]
    fn test_project_role_validation() {
        assert!(validate_project_role(&ProjectRole::new(1, 1, 0)).is_ok());
        assert_eq!(
            validate_project_role(&ProjectRole::new(1, 1, -2)),
            Err(StaffingError::Negative { field: "count" })
        );
        assert_eq!(
            validate_project_role(&ProjectRole::new(1, 1, 2).with_custom_rate(-5)),
            Err(StaffingError::Negative {
                field: "custom_rate"
            })
        );
    }

    #[test]
    fn test_empty_updates_are_valid() {
        assert!(validate_project_update(&UpdateProjectRequest::new()).is_ok());
        assert!(validate_role_update(&UpdateRoleRequest::new()).is_ok());
        assert!(validate_project_role_update(&UpdateProjectRoleRequest::new()).is_ok());
    }

    #[test]
    fn test_updates_check_only_present_fields() {
        assert_eq!(
            validate_project_update(&UpdateProjectRequest::new().with_name("")),
            Err(StaffingError::EmptyName)
        );
        assert_eq!(
            validate_project_update(&UpdateProjectRequest::new().with_total_price(-1)),
            Err(StaffingError::Negative {
                field: "total_price"
            })
        );
        assert_eq!(
            validate_project_role_update(&UpdateProjectRoleRequest::new().with_count(-1)),
            Err(StaffingError::Negative { field: "count" })
        );
    }
}
