use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStore;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::user::repository::UserRepository;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub images: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let email = params.email.ok_or(ProductError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ProductError::UserNotFound)?;

        let mut image_paths = Vec::with_capacity(params.images.len());
        for image in params.images {
            let path = self.images.save(&image.original_name, image.bytes).await?;
            image_paths.push(path);
        }

        let product = Product::new(NewProductProps {
            user_id: user.id,
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image_paths,
        })?;

        let rows = self.repository.save(&product).await?;
        if rows == 0 {
            return Err(ProductError::Repository(
                crate::domain::errors::RepositoryError::Persistence,
            ));
        }

        self.logger.info(&format!(
            "Product {} created by user {}",
            product.id, user.id
        ));
        Ok(product)
    }
}
