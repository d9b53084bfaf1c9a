use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.not_logged_in",
            ),
            CheckoutError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            CheckoutError::BasketNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "basket.not_found")
            }
            CheckoutError::AmountMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.amount_mismatch",
            ),
            CheckoutError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "checkout.commit_failed",
            ),
            CheckoutError::Repository(_) => (
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
