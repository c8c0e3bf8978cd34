use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contactbook_core::problem::ProblemDetails;
use contactbook_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error rendered as a `{title, detail}` JSON body.
///
/// Repository errors choose their own status code; anything else is a 500.
/// Validation failures report their message without the error-kind prefix.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => StatusCode::from_u16(repository_error_to_status_code(repo_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::InvalidData(message)) => message.clone(),
            _ => self.0.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %detail, "Application error");
        } else {
            tracing::warn!(status = %status, error = %detail, "Request rejected");
        }

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Json(ProblemDetails::new(title, detail))).into_response()
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
