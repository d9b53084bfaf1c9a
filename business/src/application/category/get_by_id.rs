use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_id::{GetCategoryByIdParams, GetCategoryByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCategoryByIdUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryByIdUseCase for GetCategoryByIdUseCaseImpl {
    async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, CategoryError> {
        self.repository
            .get_by_id(params.id)
            .await?
            .ok_or(CategoryError::NotFound)
    }
}
