use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::basket::use_cases::add_product::{
    AddProductToBasketParams, AddProductToBasketUseCase,
};
use business::domain::basket::use_cases::delete_product::{
    DeleteProductFromBasketParams, DeleteProductFromBasketUseCase,
};
use business::domain::basket::use_cases::get_total_price::{
    GetTotalPriceParams, GetTotalPriceUseCase,
};
use business::domain::basket::use_cases::get_user_basket::{
    GetUserBasketParams, GetUserBasketUseCase,
};
use business::domain::basket::use_cases::remove_one_quantity::{
    RemoveOneQuantityParams, RemoveOneQuantityUseCase,
};
use business::domain::shared::value_objects::UserEmail;

use crate::api::basket::dto::{AddBasketItemRequest, BasketResponse, TotalPriceResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct BasketApi {
    get_basket_use_case: Arc<dyn GetUserBasketUseCase>,
    add_product_use_case: Arc<dyn AddProductToBasketUseCase>,
    get_total_use_case: Arc<dyn GetTotalPriceUseCase>,
    delete_product_use_case: Arc<dyn DeleteProductFromBasketUseCase>,
    remove_one_use_case: Arc<dyn RemoveOneQuantityUseCase>,
}

impl BasketApi {
    pub fn new(
        get_basket_use_case: Arc<dyn GetUserBasketUseCase>,
        add_product_use_case: Arc<dyn AddProductToBasketUseCase>,
        get_total_use_case: Arc<dyn GetTotalPriceUseCase>,
        delete_product_use_case: Arc<dyn DeleteProductFromBasketUseCase>,
        remove_one_use_case: Arc<dyn RemoveOneQuantityUseCase>,
    ) -> Self {
        Self {
            get_basket_use_case,
            add_product_use_case,
            get_total_use_case,
            delete_product_use_case,
            remove_one_use_case,
        }
    }
}

/// Shopping basket API
///
/// One basket per user, created lazily on the first add.
#[OpenApi]
impl BasketApi {
    /// Get the caller's basket
    #[oai(path = "/basket", method = "get", tag = "ApiTags::Basket")]
    async fn get_basket(&self, auth: ApiBearer) -> GetBasketResponse {
        let params = GetUserBasketParams {
            email: auth.0.email.map(UserEmail::new),
        };

        match self.get_basket_use_case.execute(params).await {
            Ok(snapshot) => GetBasketResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetBasketResponse::Unauthorized(json),
                    404 => GetBasketResponse::NotFound(json),
                    _ => GetBasketResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the basket total
    ///
    /// Returns 0 when the caller has no basket yet.
    #[oai(path = "/basket/total", method = "get", tag = "ApiTags::Basket")]
    async fn get_total(&self, auth: ApiBearer) -> GetTotalResponse {
        let params = GetTotalPriceParams {
            email: auth.0.email.map(UserEmail::new),
        };

        match self.get_total_use_case.execute(params).await {
            Ok(total) => GetTotalResponse::Ok(Json(TotalPriceResponse {
                total: total.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetTotalResponse::Unauthorized(json),
                    404 => GetTotalResponse::NotFound(json),
                    _ => GetTotalResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to the basket
    ///
    /// Merges the quantity into an existing line for the same product.
    #[oai(path = "/basket/items", method = "post", tag = "ApiTags::Basket")]
    async fn add_product(
        &self,
        auth: ApiBearer,
        body: Json<AddBasketItemRequest>,
    ) -> AddBasketItemResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddBasketItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = AddProductToBasketParams {
            email: auth.0.email.map(UserEmail::new),
            product_id,
            quantity: body.0.quantity,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(()) => AddBasketItemResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddBasketItemResponse::BadRequest(json),
                    401 => AddBasketItemResponse::Unauthorized(json),
                    404 => AddBasketItemResponse::NotFound(json),
                    _ => AddBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the basket
    ///
    /// Drops the whole line regardless of quantity.
    #[oai(
        path = "/basket/items/:product_id",
        method = "delete",
        tag = "ApiTags::Basket"
    )]
    async fn delete_product(&self, auth: ApiBearer, product_id: Path<String>) -> RemoveBasketItemResponse {
        let uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveBasketItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = DeleteProductFromBasketParams {
            email: auth.0.email.map(UserEmail::new),
            product_id: uuid,
        };

        match self.delete_product_use_case.execute(params).await {
            Ok(()) => RemoveBasketItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => RemoveBasketItemResponse::Unauthorized(json),
                    404 => RemoveBasketItemResponse::NotFound(json),
                    _ => RemoveBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove one unit of a product from the basket
    ///
    /// Drops the line entirely when its quantity reaches zero.
    #[oai(
        path = "/basket/items/:product_id/remove-one",
        method = "post",
        tag = "ApiTags::Basket"
    )]
    async fn remove_one(&self, auth: ApiBearer, product_id: Path<String>) -> RemoveBasketItemResponse {
        let uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveBasketItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = RemoveOneQuantityParams {
            email: auth.0.email.map(UserEmail::new),
            product_id: uuid,
        };

        match self.remove_one_use_case.execute(params).await {
            Ok(()) => RemoveBasketItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => RemoveBasketItemResponse::Unauthorized(json),
                    404 => RemoveBasketItemResponse::NotFound(json),
                    _ => RemoveBasketItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBasketResponse {
    #[oai(status = 200)]
    Ok(Json<BasketResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTotalResponse {
    #[oai(status = 200)]
    Ok(Json<TotalPriceResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddBasketItemResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveBasketItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
