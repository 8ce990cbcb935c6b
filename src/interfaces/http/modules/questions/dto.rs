//! Question DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::super::answers::dto::{AnswerDto, AuthorDto};
use crate::domain::Question;

/// Category reference embedded in question payloads
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: String,
    pub name: String,
}

/// Question API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub category: CategoryRefDto,
    pub views: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            title: q.title,
            content: q.content,
            author: AuthorDto {
                id: q.author_id,
                username: q.author_username,
            },
            category: CategoryRefDto {
                id: q.category_id,
                name: q.category_name,
            },
            views: q.views,
            votes: q.votes,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

/// Question with its answers, returned by the detail endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionDetailDto {
    #[serde(flatten)]
    pub question: QuestionDto,
    pub answers: Vec<AnswerDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "category_id is required"))]
    pub category_id: String,
}

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
}

/// List query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuestionsParams {
    /// Filter by category id
    pub category: Option<String>,
    /// Substring match against title or content
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}
