use async_trait::async_trait;

use super::{CreateQuestionDto, ListQuestionsDto, Question, UpdateQuestionDto};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait QuestionRepositoryInterface: Send + Sync {
    async fn create_question(&self, dto: CreateQuestionDto) -> DomainResult<Question>;

    /// Newest-first, with optional category and search filters
    async fn list_questions(&self, dto: ListQuestionsDto) -> DomainResult<PaginatedResult<Question>>;
    /// Newest-first, unpaginated
    async fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Question>>;
    async fn get_question_by_id(&self, id: &str) -> DomainResult<Option<Question>>;

    async fn update_question(&self, id: &str, dto: UpdateQuestionDto) -> DomainResult<Question>;

    /// Deletes the question and all of its answers
    async fn delete_question(&self, id: &str) -> DomainResult<()>;
}
