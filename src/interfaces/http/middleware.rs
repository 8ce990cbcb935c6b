//! Authentication middleware for Axum
//!
//! Verifies the bearer token locally (signature + expiry, no I/O), then
//! re-reads the user record from the credential store before letting the
//! request through. Identity is never built from token claims alone: an
//! admin flag revoked after issuance is gone on the very next request.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::common::ApiMessage;
use crate::domain::{RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{verify_token, AuthError, JwtConfig};

/// Authentication state containing JWT config and the credential store
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Authenticated user information, resolved fresh from the store per request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Raw bearer string, attached alongside the identity for session operations
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires a valid token AND a live user
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(e) => return auth_error_response(e),
    };

    // Resolve the subject against the credential store; claims are only a
    // pointer to the identity, never the identity itself
    match auth_state.repos.users().get_user_by_id(&claims.sub).await {
        Ok(Some(user)) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from_user(&user));
            request.extensions_mut().insert(BearerToken(token.to_string()));
            next.run(request).await
        }
        Ok(None) => {
            tracing::debug!(subject = %claims.sub, "token subject no longer exists");
            auth_error_response(AuthError::UserNotFound)
        }
        Err(e) => {
            tracing::error!("identity resolution failed: {}", e);
            auth_error_response(AuthError::UserNotFound)
        }
    }
}

/// Admin-only middleware - must be layered after `auth_middleware`
pub async fn admin_middleware(request: Request<Body>, next: Next) -> Response {
    let user = request.extensions().get::<AuthenticatedUser>();

    match user {
        Some(user) if user.is_admin => next.run(request).await,
        Some(_) => auth_error_response(AuthError::NotAdmin),
        None => auth_error_response(AuthError::MissingToken),
    }
}

/// Create an authentication error response.
///
/// Expired tokens and unresolvable subjects share one generic message so the
/// response does not reveal whether the token or the account was the problem.
fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "No token, authorization denied"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token is not valid"),
        AuthError::ExpiredToken | AuthError::UserNotFound => (
            StatusCode::UNAUTHORIZED,
            "Not authorized to access this route",
        ),
        AuthError::NotAdmin => (StatusCode::FORBIDDEN, "Not authorized as admin"),
    };

    (status, Json(ApiMessage::new(message))).into_response()
}
