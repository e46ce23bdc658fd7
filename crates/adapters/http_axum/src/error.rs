//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use personnel_domain::error::PersonnelError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PersonnelError`] to an HTTP response with appropriate status code.
///
/// A missing record is answered with a bare `404` and no body.
#[derive(Debug)]
pub struct ApiError(PersonnelError);

impl From<PersonnelError> for ApiError {
    fn from(err: PersonnelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            PersonnelError::NotFound(err) => {
                tracing::debug!(%err, "resource not found");
                StatusCode::NOT_FOUND.into_response()
            }
            PersonnelError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            PersonnelError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
