//! Answer API handlers
//!
//! Ownership rules: update is owner-only, delete is owner-or-admin.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{AnswerDto, CreateAnswerRequest, UpdateAnswerRequest};
use crate::domain::{CreateAnswerDto, RepositoryProvider, UpdateAnswerDto};
use crate::interfaces::http::authz::{is_owner, is_owner_or_admin};
use crate::interfaces::http::common::{api_message, storage_error, ApiMessage, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Answer handler state
#[derive(Clone)]
pub struct AnswerHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

fn require_user(
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<AuthenticatedUser, (StatusCode, Json<ApiMessage>)> {
    match user {
        Some(Extension(user)) => Ok(user),
        None => Err(api_message(
            StatusCode::UNAUTHORIZED,
            "No token, authorization denied",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/answers",
    tag = "Answers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Question ID")),
    request_body = CreateAnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = AnswerDto),
        (status = 404, description = "Question not found", body = ApiMessage)
    )
)]
pub async fn add_answer(
    State(state): State<AnswerHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(question_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<AnswerDto>), (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    let question = state
        .repos
        .questions()
        .get_question_by_id(&question_id)
        .await
        .map_err(storage_error)?;

    if question.is_none() {
        return Err(api_message(StatusCode::NOT_FOUND, "Question not found"));
    }

    let answer = state
        .repos
        .answers()
        .create_answer(CreateAnswerDto {
            content: request.content,
            author_id: user.id,
            question_id,
        })
        .await
        .map_err(storage_error)?;

    Ok((StatusCode::CREATED, Json(AnswerDto::from(answer))))
}

#[utoipa::path(
    put,
    path = "/api/v1/answers/{id}",
    tag = "Answers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Answer ID")),
    request_body = UpdateAnswerRequest,
    responses(
        (status = 200, description = "Answer updated", body = AnswerDto),
        (status = 403, description = "Not the answer's author", body = ApiMessage),
        (status = 404, description = "Answer not found", body = ApiMessage)
    )
)]
pub async fn update_answer(
    State(state): State<AnswerHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAnswerRequest>,
) -> Result<Json<AnswerDto>, (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    let answer = state
        .repos
        .answers()
        .get_answer_by_id(&id)
        .await
        .map_err(storage_error)?;

    let Some(answer) = answer else {
        return Err(api_message(StatusCode::NOT_FOUND, "Answer not found"));
    };

    // Update is owner-only; admins get no override here
    if !is_owner(&answer.author_id, &user) {
        return Err(api_message(
            StatusCode::FORBIDDEN,
            "Not authorized to update this answer",
        ));
    }

    let updated = state
        .repos
        .answers()
        .update_answer(
            &id,
            UpdateAnswerDto {
                content: request.content,
            },
        )
        .await
        .map_err(storage_error)?;

    Ok(Json(AnswerDto::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/answers/{id}",
    tag = "Answers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Answer ID")),
    responses(
        (status = 200, description = "Answer removed", body = ApiMessage),
        (status = 403, description = "Neither author nor admin", body = ApiMessage),
        (status = 404, description = "Answer not found", body = ApiMessage)
    )
)]
pub async fn delete_answer(
    State(state): State<AnswerHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    let answer = state
        .repos
        .answers()
        .get_answer_by_id(&id)
        .await
        .map_err(storage_error)?;

    let Some(answer) = answer else {
        return Err(api_message(StatusCode::NOT_FOUND, "Answer not found"));
    };

    if !is_owner_or_admin(&answer.author_id, &user) {
        return Err(api_message(StatusCode::FORBIDDEN, "User not authorized"));
    }

    state
        .repos
        .answers()
        .delete_answer(&id)
        .await
        .map_err(storage_error)?;

    Ok(Json(ApiMessage::new("Answer removed")))
}
