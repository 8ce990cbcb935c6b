//! Question API handlers
//!
//! Ownership rules: update is owner-only (no admin override), delete is
//! owner-or-admin. Deleting a question removes its answers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateQuestionRequest, ListQuestionsParams, QuestionDetailDto, QuestionDto,
    UpdateQuestionRequest,
};
use crate::domain::{CreateQuestionDto, ListQuestionsDto, RepositoryProvider, UpdateQuestionDto};
use crate::interfaces::http::authz::{is_owner, is_owner_or_admin};
use crate::interfaces::http::common::{
    api_message, storage_error, ApiMessage, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::answers::dto::AnswerDto;

/// Question handler state
#[derive(Clone)]
pub struct QuestionHandlerState {
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
    get,
    path = "/api/v1/questions",
    tag = "Questions",
    params(ListQuestionsParams),
    responses(
        (status = 200, description = "Question list, newest first", body = PaginatedResponse<QuestionDto>)
    )
)]
pub async fn list_questions(
    State(state): State<QuestionHandlerState>,
    Query(params): Query<ListQuestionsParams>,
) -> Result<Json<PaginatedResponse<QuestionDto>>, (StatusCode, Json<ApiMessage>)> {
    let dto = ListQuestionsDto {
        category_id: params.category,
        search: params.search,
        page: Some(params.page),
        page_size: Some(params.limit),
    };

    match state.repos.questions().list_questions(dto).await {
        Ok(result) => {
            let items: Vec<QuestionDto> = result.items.into_iter().map(QuestionDto::from).collect();
            Ok(Json(PaginatedResponse::new(
                items,
                result.total,
                result.page,
                result.limit,
            )))
        }
        Err(e) => Err(storage_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/questions/category/{category_id}",
    tag = "Questions",
    params(("category_id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Questions in the category, newest first", body = [QuestionDto])
    )
)]
pub async fn list_questions_by_category(
    State(state): State<QuestionHandlerState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<QuestionDto>>, (StatusCode, Json<ApiMessage>)> {
    match state.repos.questions().list_by_category(&category_id).await {
        Ok(questions) => Ok(Json(questions.into_iter().map(QuestionDto::from).collect())),
        Err(e) => Err(storage_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/questions",
    tag = "Questions",
    security(("bearer_auth" = [])),
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionDto),
        (status = 404, description = "Category does not exist", body = ApiMessage)
    )
)]
pub async fn create_question(
    State(state): State<QuestionHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    ValidatedJson(request): ValidatedJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionDto>), (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    let category = state
        .repos
        .categories()
        .get_category_by_id(&request.category_id)
        .await
        .map_err(storage_error)?;

    if category.is_none() {
        return Err(api_message(
            StatusCode::NOT_FOUND,
            "Question category does not exist",
        ));
    }

    let question = state
        .repos
        .questions()
        .create_question(CreateQuestionDto {
            title: request.title,
            content: request.content,
            author_id: user.id,
            category_id: request.category_id,
        })
        .await
        .map_err(storage_error)?;

    Ok((StatusCode::CREATED, Json(QuestionDto::from(question))))
}

#[utoipa::path(
    get,
    path = "/api/v1/questions/{id}",
    tag = "Questions",
    params(("id" = String, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question with its answers", body = QuestionDetailDto),
        (status = 404, description = "Question not found", body = ApiMessage)
    )
)]
pub async fn get_question(
    State(state): State<QuestionHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionDetailDto>, (StatusCode, Json<ApiMessage>)> {
    let question = state
        .repos
        .questions()
        .get_question_by_id(&id)
        .await
        .map_err(storage_error)?;

    let Some(question) = question else {
        return Err(api_message(StatusCode::NOT_FOUND, "Question not found"));
    };

    let answers = state
        .repos
        .answers()
        .list_for_question(&id)
        .await
        .map_err(storage_error)?;

    Ok(Json(QuestionDetailDto {
        question: QuestionDto::from(question),
        answers: answers.into_iter().map(AnswerDto::from).collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/questions/{id}",
    tag = "Questions",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Question ID")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = QuestionDto),
        (status = 400, description = "Category does not exist", body = ApiMessage),
        (status = 403, description = "Not the question's author", body = ApiMessage),
        (status = 404, description = "Question not found", body = ApiMessage)
    )
)]
pub async fn update_question(
    State(state): State<QuestionHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateQuestionRequest>,
) -> Result<Json<QuestionDto>, (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    if let Some(ref category_id) = request.category_id {
        let category = state
            .repos
            .categories()
            .get_category_by_id(category_id)
            .await
            .map_err(storage_error)?;

        if category.is_none() {
            return Err(api_message(
                StatusCode::BAD_REQUEST,
                "The question category does not exist",
            ));
        }
    }

    let question = state
        .repos
        .questions()
        .get_question_by_id(&id)
        .await
        .map_err(storage_error)?;

    let Some(question) = question else {
        return Err(api_message(
            StatusCode::NOT_FOUND,
            "The question does not exist",
        ));
    };

    // Owner-only: admins are deliberately not allowed to edit others' posts
    if !is_owner(&question.author_id, &user) {
        return Err(api_message(
            StatusCode::FORBIDDEN,
            "Sorry you dont have permission to edit this question",
        ));
    }

    let updated = state
        .repos
        .questions()
        .update_question(
            &id,
            UpdateQuestionDto {
                title: request.title,
                content: request.content,
                category_id: request.category_id,
            },
        )
        .await
        .map_err(storage_error)?;

    Ok(Json(QuestionDto::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/questions/{id}",
    tag = "Questions",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question and its answers removed", body = ApiMessage),
        (status = 403, description = "Neither author nor admin", body = ApiMessage),
        (status = 404, description = "Question not found", body = ApiMessage)
    )
)]
pub async fn delete_question(
    State(state): State<QuestionHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, (StatusCode, Json<ApiMessage>)> {
    let user = require_user(user)?;

    let question = state
        .repos
        .questions()
        .get_question_by_id(&id)
        .await
        .map_err(storage_error)?;

    let Some(question) = question else {
        return Err(api_message(StatusCode::NOT_FOUND, "Question not found"));
    };

    if !is_owner_or_admin(&question.author_id, &user) {
        return Err(api_message(
            StatusCode::FORBIDDEN,
            "Not authorized to delete this question",
        ));
    }

    state
        .repos
        .questions()
        .delete_question(&id)
        .await
        .map_err(storage_error)?;

    Ok(Json(ApiMessage::new("Question removed")))
}
