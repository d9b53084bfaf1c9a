use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::process_payment::{
    ProcessPaymentParams, ProcessPaymentUseCase,
};
use business::domain::shared::value_objects::UserEmail;

use crate::api::checkout::dto::{CheckoutRequest, ReceiptResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    process_payment_use_case: Arc<dyn ProcessPaymentUseCase>,
}

impl CheckoutApi {
    pub fn new(process_payment_use_case: Arc<dyn ProcessPaymentUseCase>) -> Self {
        Self {
            process_payment_use_case,
        }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// Pay for the basket
    ///
    /// The amount must equal the basket total exactly; on success the basket
    /// is cleared and a plain-text receipt is returned.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn process_payment(
        &self,
        auth: ApiBearer,
        body: Json<CheckoutRequest>,
    ) -> ProcessPaymentResponse {
        let amount = match BigDecimal::from_str(&body.0.amount) {
            Ok(amount) => amount,
            Err(_) => {
                return ProcessPaymentResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "checkout.amount_invalid".to_string(),
                }));
            }
        };

        let params = ProcessPaymentParams {
            email: auth.0.email.map(UserEmail::new),
            amount,
        };

        match self.process_payment_use_case.execute(params).await {
            Ok(receipt) => ProcessPaymentResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProcessPaymentResponse::BadRequest(json),
                    401 => ProcessPaymentResponse::Unauthorized(json),
                    404 => ProcessPaymentResponse::NotFound(json),
                    _ => ProcessPaymentResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProcessPaymentResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
