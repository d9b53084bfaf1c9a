use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint.
///
/// `name` is the error class ("ValidationError", "NotFound", ...) and
/// `message` a stable key clients can translate.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
