//! Category API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{CategoryDto, CreateCategoryRequest};
use crate::domain::{CreateCategoryDto, DomainError, RepositoryProvider};
use crate::interfaces::http::common::{api_message, storage_error, ApiMessage, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Category handler state
#[derive(Clone)]
pub struct CategoryHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Category list, sorted by name", body = [CategoryDto])
    )
)]
pub async fn list_categories(
    State(state): State<CategoryHandlerState>,
) -> Result<Json<Vec<CategoryDto>>, (StatusCode, Json<ApiMessage>)> {
    match state.repos.categories().list_categories().await {
        Ok(categories) => Ok(Json(categories.into_iter().map(CategoryDto::from).collect())),
        Err(e) => Err(storage_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 403, description = "Not an admin", body = ApiMessage),
        (status = 409, description = "Name already taken", body = ApiMessage)
    )
)]
pub async fn create_category(
    State(state): State<CategoryHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), (StatusCode, Json<ApiMessage>)> {
    let Some(Extension(user)) = user else {
        return Err(api_message(
            StatusCode::UNAUTHORIZED,
            "No token, authorization denied",
        ));
    };

    let category = state
        .repos
        .categories()
        .create_category(CreateCategoryDto {
            name: request.name,
            description: request.description,
            created_by: user.id,
        })
        .await
        .map_err(|e| match e {
            DomainError::Conflict(msg) => api_message(StatusCode::CONFLICT, msg),
            other => storage_error(other),
        })?;

    Ok((StatusCode::CREATED, Json(CategoryDto::from(category))))
}
