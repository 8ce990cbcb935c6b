//! Answer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Answer;

/// Author reference embedded in answer/question payloads
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    pub username: String,
}

/// Answer API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnswerDto {
    pub id: String,
    pub content: String,
    pub author: AuthorDto,
    pub question_id: String,
    pub is_accepted: bool,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Answer> for AnswerDto {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            content: a.content,
            author: AuthorDto {
                id: a.author_id,
                username: a.author_username,
            },
            question_id: a.question_id,
            is_accepted: a.is_accepted,
            votes: a.votes,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAnswerRequest {
    pub content: Option<String>,
}
