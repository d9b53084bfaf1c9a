use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.not_logged_in",
            ),
            BasketError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            BasketError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "basket.not_found"),
            BasketError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "basket.item_not_found")
            }
            BasketError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            BasketError::QuantityInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.quantity_invalid",
            ),
            BasketError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "basket.commit_failed",
            ),
            BasketError::Repository(_) => (
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
