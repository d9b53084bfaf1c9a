use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{
    CreateProductParams, CreateProductUseCase, UploadedImage,
};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_own::{GetOwnProductsParams, GetOwnProductsUseCase};
use business::domain::product::use_cases::get_own_by_id::{
    GetOwnProductByIdParams, GetOwnProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::UserEmail;

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::my_products::dto::{CreateProductForm, UpdateProductRequest};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct MyProductsApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_own_use_case: Arc<dyn GetOwnProductsUseCase>,
    get_own_by_id_use_case: Arc<dyn GetOwnProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl MyProductsApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_own_use_case: Arc<dyn GetOwnProductsUseCase>,
        get_own_by_id_use_case: Arc<dyn GetOwnProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_own_use_case,
            get_own_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Seller product management API
///
/// Every operation is scoped to the authenticated seller; another seller's
/// product id reads as absent.
#[OpenApi]
impl MyProductsApi {
    /// List the caller's products
    #[oai(path = "/my-products", method = "get", tag = "ApiTags::MyProducts")]
    async fn get_own_products(&self, auth: ApiBearer) -> GetOwnProductsResponse {
        let params = GetOwnProductsParams {
            email: auth.0.email.map(UserEmail::new),
        };

        match self.get_own_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetOwnProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetOwnProductsResponse::Unauthorized(json),
                    404 => GetOwnProductsResponse::NotFound(json),
                    _ => GetOwnProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get one of the caller's products by ID
    #[oai(path = "/my-products/:id", method = "get", tag = "ApiTags::MyProducts")]
    async fn get_own_product_by_id(&self, auth: ApiBearer, id: Path<String>) -> GetOwnProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetOwnProductByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = GetOwnProductByIdParams {
            email: auth.0.email.map(UserEmail::new),
            id: uuid,
        };

        match self.get_own_by_id_use_case.execute(params).await {
            Ok(product) => GetOwnProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetOwnProductByIdResponse::Unauthorized(json),
                    404 => GetOwnProductByIdResponse::NotFound(json),
                    _ => GetOwnProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product with image uploads
    #[oai(path = "/my-products", method = "post", tag = "ApiTags::MyProducts")]
    async fn create_product(&self, auth: ApiBearer, form: CreateProductForm) -> CreateProductResponse {
        let price = match BigDecimal::from_str(&form.price) {
            Ok(price) => price,
            Err(_) => {
                return CreateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.price_invalid".to_string(),
                }));
            }
        };
        let category_id = match Uuid::parse_str(&form.category_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "category.invalid_id".to_string(),
                }));
            }
        };

        let mut images = Vec::new();
        for upload in form.images {
            let original_name = upload
                .file_name()
                .unwrap_or("image")
                .to_string();
            let bytes = match upload.into_vec().await {
                Ok(bytes) => bytes,
                Err(_) => {
                    return CreateProductResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "product.image_unreadable".to_string(),
                    }));
                }
            };
            images.push(UploadedImage {
                original_name,
                bytes,
            });
        }

        let params = CreateProductParams {
            email: auth.0.email.map(UserEmail::new),
            category_id,
            name: form.name,
            description: form.description,
            price,
            images,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    401 => CreateProductResponse::Unauthorized(json),
                    404 => CreateProductResponse::NotFound(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update one of the caller's products
    #[oai(path = "/my-products/:id", method = "put", tag = "ApiTags::MyProducts")]
    async fn update_product(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };
        let price = match BigDecimal::from_str(&body.0.price) {
            Ok(price) => price,
            Err(_) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.price_invalid".to_string(),
                }));
            }
        };

        let params = UpdateProductParams {
            email: auth.0.email.map(UserEmail::new),
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            price,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    401 => UpdateProductResponse::Unauthorized(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete one of the caller's products
    #[oai(path = "/my-products/:id", method = "delete", tag = "ApiTags::MyProducts")]
    async fn delete_product(&self, auth: ApiBearer, id: Path<String>) -> DeleteProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = DeleteProductParams {
            email: auth.0.email.map(UserEmail::new),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteProductResponse::Unauthorized(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOwnProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOwnProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
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
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum DeleteProductResponse {
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
