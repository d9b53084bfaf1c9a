use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::verification::errors::VerificationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for VerificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            VerificationError::ResendTooSoon => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "verification.resend_too_soon",
            ),
            VerificationError::InvalidCode => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "verification.invalid_code",
            ),
            VerificationError::Repository(_) => (
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
