use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        let category = Category::new(params.name)?;

        let rows = self.repository.save(&category).await?;
        if rows == 0 {
            return Err(CategoryError::CommitFailed);
        }

        self.logger
            .info(&format!("Category {} created", category.id));
        Ok(category)
    }
}
