use async_trait::async_trait;

use super::{Answer, CreateAnswerDto, UpdateAnswerDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait AnswerRepositoryInterface: Send + Sync {
    async fn create_answer(&self, dto: CreateAnswerDto) -> DomainResult<Answer>;

    /// Oldest-first, so discussion threads read top-down
    async fn list_for_question(&self, question_id: &str) -> DomainResult<Vec<Answer>>;
    async fn get_answer_by_id(&self, id: &str) -> DomainResult<Option<Answer>>;

    async fn update_answer(&self, id: &str, dto: UpdateAnswerDto) -> DomainResult<Answer>;
    async fn delete_answer(&self, id: &str) -> DomainResult<()>;
}
