use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::UserEmail;
use business::domain::wishlist::use_cases::add_product::{
    AddProductToWishlistParams, AddProductToWishlistUseCase,
};
use business::domain::wishlist::use_cases::get_user_wishlist::{
    GetUserWishlistParams, GetUserWishlistUseCase,
};
use business::domain::wishlist::use_cases::remove_product::{
    RemoveProductFromWishlistParams, RemoveProductFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{AddWishlistItemRequest, WishlistResponse};

pub struct WishlistApi {
    get_wishlist_use_case: Arc<dyn GetUserWishlistUseCase>,
    add_product_use_case: Arc<dyn AddProductToWishlistUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_wishlist_use_case: Arc<dyn GetUserWishlistUseCase>,
        add_product_use_case: Arc<dyn AddProductToWishlistUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromWishlistUseCase>,
    ) -> Self {
        Self {
            get_wishlist_use_case,
            add_product_use_case,
            remove_product_use_case,
        }
    }
}

/// Wishlist API
///
/// One wishlist per user; a product appears at most once.
#[OpenApi]
impl WishlistApi {
    /// Get the caller's wishlist
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(&self, auth: ApiBearer) -> GetWishlistResponse {
        let params = GetUserWishlistParams {
            email: auth.0.email.map(UserEmail::new),
        };

        match self.get_wishlist_use_case.execute(params).await {
            Ok(snapshot) => GetWishlistResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetWishlistResponse::Unauthorized(json),
                    404 => GetWishlistResponse::NotFound(json),
                    _ => GetWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to the wishlist
    ///
    /// Returns 409 when the product is already wished for.
    #[oai(path = "/wishlist/items", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_product(
        &self,
        auth: ApiBearer,
        body: Json<AddWishlistItemRequest>,
    ) -> AddWishlistItemResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddWishlistItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = AddProductToWishlistParams {
            email: auth.0.email.map(UserEmail::new),
            product_id,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(()) => AddWishlistItemResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => AddWishlistItemResponse::Unauthorized(json),
                    404 => AddWishlistItemResponse::NotFound(json),
                    409 => AddWishlistItemResponse::Conflict(json),
                    _ => AddWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the wishlist
    #[oai(
        path = "/wishlist/items/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlist"
    )]
    async fn remove_product(
        &self,
        auth: ApiBearer,
        product_id: Path<String>,
    ) -> RemoveWishlistItemResponse {
        let uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveWishlistItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = RemoveProductFromWishlistParams {
            email: auth.0.email.map(UserEmail::new),
            product_id: uuid,
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(()) => RemoveWishlistItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => RemoveWishlistItemResponse::Unauthorized(json),
                    404 => RemoveWishlistItemResponse::NotFound(json),
                    _ => RemoveWishlistItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWishlistItemResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveWishlistItemResponse {
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
