//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use crate::domain::{CreateUserDto, DomainError, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::verify_password;
use crate::interfaces::http::common::{api_message, storage_error, ApiMessage, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = AuthResponse),
        (status = 400, description = "Username or email already taken", body = ApiMessage),
        (status = 422, description = "Validation error", body = ApiMessage)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, Json<ApiMessage>)> {
    let users = state.repos.users();

    let by_email = users
        .get_user_by_email(&request.email)
        .await
        .map_err(storage_error)?;
    let by_username = users
        .get_user_by_username(&request.username)
        .await
        .map_err(storage_error)?;

    if by_email.is_some() || by_username.is_some() {
        return Err(api_message(
            StatusCode::BAD_REQUEST,
            "User already exists with that email or username",
        ));
    }

    let user = users
        .create_user(CreateUserDto {
            username: request.username,
            email: request.email,
            password: request.password,
            is_admin: false,
        })
        .await
        .map_err(|e| match e {
            // Unique index caught a concurrent registration
            DomainError::Conflict(_) => api_message(
                StatusCode::BAD_REQUEST,
                "User already exists with that email or username",
            ),
            other => storage_error(other),
        })?;

    let token = create_token(&user.id, &user.email, &state.jwt_config)
        .map_err(|e| storage_error(DomainError::Storage(e.to_string())))?;

    let response = AuthResponse {
        user: UserInfo::from(&user),
        token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = AuthResponse),
        (status = 400, description = "Invalid credentials", body = ApiMessage)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ApiMessage>)> {
    let user = state
        .repos
        .users()
        .get_user_by_email(&request.email)
        .await
        .map_err(storage_error)?;

    // One answer for unknown email and wrong password: no account enumeration
    let Some(user) = user else {
        return Err(api_message(
            StatusCode::BAD_REQUEST,
            "Invalid login credentials",
        ));
    };

    let password_valid = verify_password(&request.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err(api_message(
            StatusCode::BAD_REQUEST,
            "Invalid login credentials",
        ));
    }

    let token = create_token(&user.id, &user.email, &state.jwt_config)
        .map_err(|e| storage_error(DomainError::Storage(e.to_string())))?;

    Ok(Json(AuthResponse {
        user: UserInfo::from(&user),
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = ApiMessage),
        (status = 401, description = "Not authenticated", body = ApiMessage)
    )
)]
pub async fn logout(
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<ApiMessage>, (StatusCode, Json<ApiMessage>)> {
    let Some(Extension(user)) = user else {
        return Err(api_message(
            StatusCode::UNAUTHORIZED,
            "No token, authorization denied",
        ));
    };

    // Tokens are stateless; logout is an acknowledgment and the client
    // discards its credential
    tracing::debug!(user = %user.username, "user logged out");
    Ok(Json(ApiMessage::new("Logged out successfully")))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user info", body = UserInfo),
        (status = 401, description = "Not authenticated", body = ApiMessage)
    )
)]
pub async fn get_current_user(
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<UserInfo>, (StatusCode, Json<ApiMessage>)> {
    let Some(Extension(user)) = user else {
        return Err(api_message(
            StatusCode::UNAUTHORIZED,
            "No token, authorization denied",
        ));
    };

    // The middleware already re-read this identity from the store
    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        email: user.email,
        is_admin: user.is_admin,
    }))
}
