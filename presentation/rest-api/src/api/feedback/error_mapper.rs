use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::rating::errors::RatingError;
use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RatingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RatingError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.not_logged_in",
            ),
            RatingError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            RatingError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            RatingError::ValueOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "rating.value_out_of_range",
            ),
            RatingError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "rating.not_found"),
            RatingError::Repository(_) => (
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

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReviewError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.not_logged_in",
            ),
            ReviewError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            ReviewError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "review.not_found"),
            ReviewError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "review.commit_failed",
            ),
            ReviewError::Repository(_) => (
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
