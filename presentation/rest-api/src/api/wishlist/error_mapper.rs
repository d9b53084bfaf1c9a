use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishlistError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.not_logged_in",
            ),
            WishlistError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            WishlistError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "wishlist.not_found"),
            WishlistError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "wishlist.item_not_found")
            }
            WishlistError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            WishlistError::ProductAlreadyAdded => (
                StatusCode::CONFLICT,
                "Conflict",
                "wishlist.product_already_added",
            ),
            WishlistError::CommitFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "wishlist.commit_failed",
            ),
            WishlistError::Repository(_) => (
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
