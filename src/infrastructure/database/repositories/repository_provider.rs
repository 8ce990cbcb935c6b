//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    AnswerRepositoryInterface, CategoryRepositoryInterface, QuestionRepositoryInterface,
    RepositoryProvider, UserRepositoryInterface,
};

use super::answer_repository::SeaOrmAnswerRepository;
use super::category_repository::SeaOrmCategoryRepository;
use super::question_repository::SeaOrmQuestionRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().get_user_by_id("u-1").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    categories: SeaOrmCategoryRepository,
    questions: SeaOrmQuestionRepository,
    answers: SeaOrmAnswerRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            categories: SeaOrmCategoryRepository::new(db.clone()),
            questions: SeaOrmQuestionRepository::new(db.clone()),
            answers: SeaOrmAnswerRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }

    fn categories(&self) -> &dyn CategoryRepositoryInterface {
        &self.categories
    }

    fn questions(&self) -> &dyn QuestionRepositoryInterface {
        &self.questions
    }

    fn answers(&self) -> &dyn AnswerRepositoryInterface {
        &self.answers
    }
}
