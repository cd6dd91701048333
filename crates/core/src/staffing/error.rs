use thiserror::Error;

/// Errors that can occur when validating staffing data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StaffingError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name too long (max 255 characters)")]
    NameTooLong,
    #[error("Coefficient must be a finite, non-negative number")]
    InvalidCoefficient,
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staffing_error_display() {
        assert_eq!(StaffingError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            StaffingError::NameTooLong.to_string(),
            "Name too long (max 255 characters)"
        );
        assert_eq!(
            StaffingError::Negative {
                field: "default_rate"
            }
            .to_string(),
            "default_rate must not be negative"
        );
    }
}
