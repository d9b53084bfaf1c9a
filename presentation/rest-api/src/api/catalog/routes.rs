use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_by_category_use_case,
        }
    }
}

/// Public catalog API
///
/// Anonymous product browsing; no authentication required.
#[OpenApi]
impl CatalogApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List products in a category
    ///
    /// Returns 404 when the category holds no products.
    #[oai(
        path = "/products/category/:category_id",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn get_products_by_category(
        &self,
        category_id: Path<String>,
    ) -> GetProductsByCategoryResponse {
        let uuid = match Uuid::parse_str(&category_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductsByCategoryResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "category.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams { category_id: uuid })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsByCategoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductsByCategoryResponse::NotFound(json),
                    _ => GetProductsByCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
