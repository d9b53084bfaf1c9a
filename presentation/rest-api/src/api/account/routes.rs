use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::verification::use_cases::confirm_code::{
    ConfirmVerificationCodeParams, ConfirmVerificationCodeUseCase,
};
use business::domain::verification::use_cases::request_code::{
    CODE_TTL, RequestVerificationCodeParams, RequestVerificationCodeUseCase,
};

use crate::api::account::dto::{CodeRequestedResponse, ConfirmCodeRequest, RequestCodeRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AccountApi {
    request_code_use_case: Arc<dyn RequestVerificationCodeUseCase>,
    confirm_code_use_case: Arc<dyn ConfirmVerificationCodeUseCase>,
}

impl AccountApi {
    pub fn new(
        request_code_use_case: Arc<dyn RequestVerificationCodeUseCase>,
        confirm_code_use_case: Arc<dyn ConfirmVerificationCodeUseCase>,
    ) -> Self {
        Self {
            request_code_use_case,
            confirm_code_use_case,
        }
    }
}

/// Account verification API
///
/// Issues short-lived verification codes; the code itself is delivered out
/// of band and never appears in a response.
#[OpenApi]
impl AccountApi {
    /// Request a verification code
    ///
    /// Rejected while a previously issued code is still live.
    #[oai(
        path = "/account/verification/request",
        method = "post",
        tag = "ApiTags::Account"
    )]
    async fn request_code(&self, body: Json<RequestCodeRequest>) -> RequestCodeResponse {
        let params = RequestVerificationCodeParams {
            email: body.0.email,
        };

        match self.request_code_use_case.execute(params).await {
            Ok(_code) => RequestCodeResponse::Created(Json(CodeRequestedResponse {
                expires_in_seconds: CODE_TTL.as_secs(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RequestCodeResponse::BadRequest(json),
                    _ => RequestCodeResponse::InternalError(json),
                }
            }
        }
    }

    /// Confirm a verification code
    ///
    /// A wrong, expired, or never-issued code is rejected with 400; a valid
    /// code is consumed.
    #[oai(
        path = "/account/verification/confirm",
        method = "post",
        tag = "ApiTags::Account"
    )]
    async fn confirm_code(&self, body: Json<ConfirmCodeRequest>) -> ConfirmCodeResponse {
        let params = ConfirmVerificationCodeParams {
            email: body.0.email,
            code: body.0.code,
        };

        match self.confirm_code_use_case.execute(params).await {
            Ok(()) => ConfirmCodeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ConfirmCodeResponse::BadRequest(json),
                    _ => ConfirmCodeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RequestCodeResponse {
    #[oai(status = 201)]
    Created(Json<CodeRequestedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmCodeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
