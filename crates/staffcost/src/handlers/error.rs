use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use staffcost_core::storage::{repository_error_to_status_code, RepositoryError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<anyhow::Error>) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_repository_errors_keep_their_status() {
        assert_eq!(
            status_of(RepositoryError::not_found("Role", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RepositoryError::MissingReference {
                project_id: 1,
                role_id: 2
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RepositoryError::InvalidData("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RepositoryError::ConnectionFailed("down".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        assert_eq!(
            status_of(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
