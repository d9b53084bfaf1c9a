use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::rating::use_cases::add_rating::{AddRatingParams, AddRatingUseCase};
use business::domain::rating::use_cases::get_product_rating::{
    GetProductRatingParams, GetProductRatingUseCase,
};
use business::domain::rating::use_cases::get_products_by_rating::GetProductsByRatingUseCase;
use business::domain::rating::use_cases::get_top_rated::{GetTopRatedParams, GetTopRatedUseCase};
use business::domain::review::use_cases::add_review::{AddReviewParams, AddReviewUseCase};
use business::domain::review::use_cases::get_product_reviews::{
    GetProductReviewsParams, GetProductReviewsUseCase,
};
use business::domain::shared::value_objects::UserEmail;

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::feedback::dto::{
    AddRatingRequest, AddReviewRequest, ProductRatingResponse, ReviewResponse,
};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

const DEFAULT_TOP_RATED_COUNT: i64 = 10;

pub struct FeedbackApi {
    add_rating_use_case: Arc<dyn AddRatingUseCase>,
    get_rating_use_case: Arc<dyn GetProductRatingUseCase>,
    add_review_use_case: Arc<dyn AddReviewUseCase>,
    get_reviews_use_case: Arc<dyn GetProductReviewsUseCase>,
    by_rating_use_case: Arc<dyn GetProductsByRatingUseCase>,
    top_rated_use_case: Arc<dyn GetTopRatedUseCase>,
}

impl FeedbackApi {
    pub fn new(
        add_rating_use_case: Arc<dyn AddRatingUseCase>,
        get_rating_use_case: Arc<dyn GetProductRatingUseCase>,
        add_review_use_case: Arc<dyn AddReviewUseCase>,
        get_reviews_use_case: Arc<dyn GetProductReviewsUseCase>,
        by_rating_use_case: Arc<dyn GetProductsByRatingUseCase>,
        top_rated_use_case: Arc<dyn GetTopRatedUseCase>,
    ) -> Self {
        Self {
            add_rating_use_case,
            get_rating_use_case,
            add_review_use_case,
            get_reviews_use_case,
            by_rating_use_case,
            top_rated_use_case,
        }
    }
}

/// Ratings and reviews API
#[OpenApi]
impl FeedbackApi {
    /// Rate a product
    ///
    /// Repeated submissions accumulate; the average is the mean over all rows.
    #[oai(
        path = "/products/:id/ratings",
        method = "post",
        tag = "ApiTags::Feedback"
    )]
    async fn add_rating(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<AddRatingRequest>,
    ) -> AddRatingResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddRatingResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = AddRatingParams {
            email: auth.0.email.map(UserEmail::new),
            product_id: uuid,
            value: body.0.value,
        };

        match self.add_rating_use_case.execute(params).await {
            Ok(()) => AddRatingResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddRatingResponse::BadRequest(json),
                    401 => AddRatingResponse::Unauthorized(json),
                    404 => AddRatingResponse::NotFound(json),
                    _ => AddRatingResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product's average rating
    ///
    /// Returns 404 when the product has never been rated.
    #[oai(path = "/products/:id/rating", method = "get", tag = "ApiTags::Feedback")]
    async fn get_rating(&self, id: Path<String>) -> GetRatingResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetRatingResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_rating_use_case
            .execute(GetProductRatingParams { product_id: uuid })
            .await
        {
            Ok(average) => GetRatingResponse::Ok(Json(ProductRatingResponse {
                product_id: uuid.to_string(),
                average: average.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRatingResponse::NotFound(json),
                    _ => GetRatingResponse::InternalError(json),
                }
            }
        }
    }

    /// Review a product
    #[oai(
        path = "/products/:id/reviews",
        method = "post",
        tag = "ApiTags::Feedback"
    )]
    async fn add_review(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<AddReviewRequest>,
    ) -> AddReviewResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddReviewResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = AddReviewParams {
            email: auth.0.email.map(UserEmail::new),
            product_id: uuid,
            content: body.0.content,
        };

        match self.add_review_use_case.execute(params).await {
            Ok(()) => AddReviewResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => AddReviewResponse::Unauthorized(json),
                    404 => AddReviewResponse::NotFound(json),
                    _ => AddReviewResponse::InternalError(json),
                }
            }
        }
    }

    /// List a product's reviews
    ///
    /// Returns 404 when the product has no reviews.
    #[oai(path = "/products/:id/reviews", method = "get", tag = "ApiTags::Feedback")]
    async fn get_reviews(&self, id: Path<String>) -> GetReviewsResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetReviewsResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_reviews_use_case
            .execute(GetProductReviewsParams { product_id: uuid })
            .await
        {
            Ok(reviews) => {
                let responses: Vec<ReviewResponse> =
                    reviews.into_iter().map(|r| r.into()).collect();
                GetReviewsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReviewsResponse::NotFound(json),
                    _ => GetReviewsResponse::InternalError(json),
                }
            }
        }
    }

    /// List products by descending rating
    #[oai(path = "/products/by-rating", method = "get", tag = "ApiTags::Feedback")]
    async fn get_by_rating(&self) -> RatedProductsResponse {
        match self.by_rating_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                RatedProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RatedProductsResponse::NotFound(json),
                    _ => RatedProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List the top rated products
    #[oai(path = "/products/top-rated", method = "get", tag = "ApiTags::Feedback")]
    async fn get_top_rated(&self, count: Query<Option<i64>>) -> RatedProductsResponse {
        let params = GetTopRatedParams {
            count: count.0.unwrap_or(DEFAULT_TOP_RATED_COUNT),
        };

        match self.top_rated_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                RatedProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RatedProductsResponse::NotFound(json),
                    _ => RatedProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddRatingResponse {
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
pub enum GetRatingResponse {
    #[oai(status = 200)]
    Ok(Json<ProductRatingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddReviewResponse {
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
pub enum GetReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RatedProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
