pub mod calculator;
pub mod error;
pub mod health;
pub mod project_roles;
pub mod projects;
pub mod roles;

pub use error::AppError;
