use std::sync::Arc;

use logger::TracingLogger;
use persistence::basket::repository::BasketRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::rating::repository::RatingRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;
use persistence::role::repository::RoleRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;
use storage::local_image_store::LocalImageStore;
use verification::in_memory_code_store::InMemoryCodeStore;

use business::application::basket::add_product::AddProductToBasketUseCaseImpl;
use business::application::basket::delete_product::DeleteProductFromBasketUseCaseImpl;
use business::application::basket::get_total_price::GetTotalPriceUseCaseImpl;
use business::application::basket::get_user_basket::GetUserBasketUseCaseImpl;
use business::application::basket::remove_one_quantity::RemoveOneQuantityUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::checkout::process_payment::ProcessPaymentUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_own::GetOwnProductsUseCaseImpl;
use business::application::product::get_own_by_id::GetOwnProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::rating::add_rating::AddRatingUseCaseImpl;
use business::application::rating::get_product_rating::GetProductRatingUseCaseImpl;
use business::application::rating::get_products_by_rating::GetProductsByRatingUseCaseImpl;
use business::application::rating::get_top_rated::GetTopRatedUseCaseImpl;
use business::application::review::add_review::AddReviewUseCaseImpl;
use business::application::review::get_product_reviews::GetProductReviewsUseCaseImpl;
use business::application::role::assign_to_user::AssignRoleToUserUseCaseImpl;
use business::application::role::create::CreateRoleUseCaseImpl;
use business::application::role::delete::DeleteRoleUseCaseImpl;
use business::application::role::get_all::GetAllRolesUseCaseImpl;
use business::application::role::get_by_id::GetRoleByIdUseCaseImpl;
use business::application::verification::confirm_code::ConfirmVerificationCodeUseCaseImpl;
use business::application::verification::request_code::RequestVerificationCodeUseCaseImpl;
use business::application::wishlist::add_product::AddProductToWishlistUseCaseImpl;
use business::application::wishlist::get_user_wishlist::GetUserWishlistUseCaseImpl;
use business::application::wishlist::remove_product::RemoveProductFromWishlistUseCaseImpl;

use crate::config::images_config::ImagesConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub my_products_api: crate::api::my_products::routes::MyProductsApi,
    pub basket_api: crate::api::basket::routes::BasketApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub feedback_api: crate::api::feedback::routes::FeedbackApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub admin_api: crate::api::admin::routes::AdminApi,
    pub account_api: crate::api::account::routes::AccountApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let basket_repository = Arc::new(BasketRepositoryPostgres::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(pool.clone()));
        let rating_repository = Arc::new(RatingRepositoryPostgres::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let role_repository = Arc::new(RoleRepositoryPostgres::new(pool));

        let images_config = ImagesConfig::from_env();
        let image_store = Arc::new(LocalImageStore::new(images_config.dir).await?);
        let code_store = Arc::new(InMemoryCodeStore::new());

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_products_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Seller product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            users: user_repository.clone(),
            images: image_store,
            logger: logger.clone(),
        });
        let get_own_products_use_case = Arc::new(GetOwnProductsUseCaseImpl {
            repository: product_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_own_product_by_id_use_case = Arc::new(GetOwnProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });

        // Basket use cases
        let get_user_basket_use_case = Arc::new(GetUserBasketUseCaseImpl {
            repository: basket_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_to_basket_use_case = Arc::new(AddProductToBasketUseCaseImpl {
            repository: basket_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_total_price_use_case = Arc::new(GetTotalPriceUseCaseImpl {
            repository: basket_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_from_basket_use_case = Arc::new(DeleteProductFromBasketUseCaseImpl {
            repository: basket_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_one_quantity_use_case = Arc::new(RemoveOneQuantityUseCaseImpl {
            repository: basket_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });

        // Wishlist use cases
        let get_user_wishlist_use_case = Arc::new(GetUserWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_to_wishlist_use_case = Arc::new(AddProductToWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_product_from_wishlist_use_case =
            Arc::new(RemoveProductFromWishlistUseCaseImpl {
                repository: wishlist_repository,
                users: user_repository.clone(),
                logger: logger.clone(),
            });

        // Checkout use case
        let process_payment_use_case = Arc::new(ProcessPaymentUseCaseImpl {
            baskets: basket_repository,
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });

        // Rating and review use cases
        let add_rating_use_case = Arc::new(AddRatingUseCaseImpl {
            repository: rating_repository.clone(),
            users: user_repository.clone(),
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_rating_use_case = Arc::new(GetProductRatingUseCaseImpl {
            repository: rating_repository,
            logger: logger.clone(),
        });
        let get_products_by_rating_use_case = Arc::new(GetProductsByRatingUseCaseImpl {
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_top_rated_use_case = Arc::new(GetTopRatedUseCaseImpl {
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_review_use_case = Arc::new(AddReviewUseCaseImpl {
            repository: review_repository.clone(),
            users: user_repository.clone(),
            products: product_repository,
            logger: logger.clone(),
        });
        let get_product_reviews_use_case = Arc::new(GetProductReviewsUseCaseImpl {
            repository: review_repository,
            logger: logger.clone(),
        });

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_category_by_id_use_case = Arc::new(GetCategoryByIdUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Role use cases
        let get_all_roles_use_case = Arc::new(GetAllRolesUseCaseImpl {
            repository: role_repository.clone(),
            logger: logger.clone(),
        });
        let get_role_by_id_use_case = Arc::new(GetRoleByIdUseCaseImpl {
            repository: role_repository.clone(),
            logger: logger.clone(),
        });
        let create_role_use_case = Arc::new(CreateRoleUseCaseImpl {
            repository: role_repository.clone(),
            logger: logger.clone(),
        });
        let delete_role_use_case = Arc::new(DeleteRoleUseCaseImpl {
            repository: role_repository.clone(),
            logger: logger.clone(),
        });
        let assign_role_to_user_use_case = Arc::new(AssignRoleToUserUseCaseImpl {
            repository: role_repository,
            users: user_repository,
            logger: logger.clone(),
        });

        // Verification use cases
        let request_code_use_case = Arc::new(RequestVerificationCodeUseCaseImpl {
            store: code_store.clone(),
            logger: logger.clone(),
        });
        let confirm_code_use_case = Arc::new(ConfirmVerificationCodeUseCaseImpl {
            store: code_store,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_products_by_category_use_case,
        );

        let my_products_api = crate::api::my_products::routes::MyProductsApi::new(
            create_product_use_case,
            get_own_products_use_case,
            get_own_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let basket_api = crate::api::basket::routes::BasketApi::new(
            get_user_basket_use_case,
            add_product_to_basket_use_case,
            get_total_price_use_case,
            delete_product_from_basket_use_case,
            remove_one_quantity_use_case,
        );

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            get_user_wishlist_use_case,
            add_product_to_wishlist_use_case,
            remove_product_from_wishlist_use_case,
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(process_payment_use_case);

        let feedback_api = crate::api::feedback::routes::FeedbackApi::new(
            add_rating_use_case,
            get_product_rating_use_case,
            add_review_use_case,
            get_product_reviews_use_case,
            get_products_by_rating_use_case,
            get_top_rated_use_case,
        );

        let category_api = crate::api::category::routes::CategoryApi::new(
            get_all_categories_use_case,
            get_category_by_id_use_case,
            create_category_use_case,
            update_category_use_case,
            delete_category_use_case,
        );

        let admin_api = crate::api::admin::routes::AdminApi::new(
            get_all_roles_use_case,
            get_role_by_id_use_case,
            create_role_use_case,
            delete_role_use_case,
            assign_role_to_user_use_case,
        );

        let account_api = crate::api::account::routes::AccountApi::new(
            request_code_use_case,
            confirm_code_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            my_products_api,
            basket_api,
            wishlist_api,
            checkout_api,
            feedback_api,
            category_api,
            admin_api,
            account_api,
        })
    }
}
