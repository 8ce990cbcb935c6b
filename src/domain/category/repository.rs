use async_trait::async_trait;

use super::{Category, CreateCategoryDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait CategoryRepositoryInterface: Send + Sync {
    async fn create_category(&self, dto: CreateCategoryDto) -> DomainResult<Category>;

    /// All categories, sorted by name ascending
    async fn list_categories(&self) -> DomainResult<Vec<Category>>;
    async fn get_category_by_id(&self, id: &str) -> DomainResult<Option<Category>>;
}
