//! Domain layer
//!
//! Core entities, DTOs, repository interfaces, and domain errors.
//! No I/O here; persistence lives behind the repository traits.

pub mod answer;
pub mod category;
pub mod error;
pub mod question;
pub mod repositories;
pub mod user;

pub use answer::{Answer, AnswerRepositoryInterface, CreateAnswerDto, UpdateAnswerDto};
pub use category::{Category, CategoryRepositoryInterface, CreateCategoryDto};
pub use error::{DomainError, DomainResult};
pub use question::{
    CreateQuestionDto, ListQuestionsDto, Question, QuestionRepositoryInterface, UpdateQuestionDto,
};
pub use repositories::RepositoryProvider;
pub use user::{CreateUserDto, User, UserRepositoryInterface};
