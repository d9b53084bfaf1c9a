use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::role::errors::RoleError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RoleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RoleError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "role.name_empty",
            ),
            RoleError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "role.already_exists",
            ),
            RoleError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "role.not_found"),
            RoleError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "role.user_not_found"),
            RoleError::AlreadyAssigned => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "role.already_assigned",
            ),
            RoleError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "role.commit_failed",
            ),
            RoleError::Repository(_) => (
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
