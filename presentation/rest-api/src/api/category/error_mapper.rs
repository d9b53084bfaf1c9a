use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CategoryError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.name_empty",
            ),
            CategoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "category.not_found"),
            CategoryError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "category.commit_failed",
            ),
            CategoryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
