mod error;
mod operations;
mod requests;
mod types;

pub use error::StaffingError;
pub use operations::{
    validate_project, validate_project_role, validate_project_role_update,
    validate_project_update, validate_role, validate_role_update, MAX_NAME_LEN,
};
pub use requests::{
    CreateProjectRequest, CreateProjectRoleRequest, CreateRoleRequest, UpdateProjectRequest,
    UpdateProjectRoleRequest, UpdateRoleRequest,
};
pub use types::{CostReport, Project, ProjectRole, Role};
