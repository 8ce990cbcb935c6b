//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::middleware::{admin_middleware, auth_middleware, AuthState};

use super::common::{ApiMessage, PaginatedResponse};
use super::modules::{answers, auth, categories, health, questions};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        auth::get_current_user,
        // Categories
        categories::list_categories,
        categories::create_category,
        // Questions
        questions::list_questions,
        questions::list_questions_by_category,
        questions::create_question,
        questions::get_question,
        questions::update_question,
        questions::delete_question,
        // Answers
        answers::add_answer,
        answers::update_answer,
        answers::delete_answer,
    ),
    components(
        schemas(
            // Common
            ApiMessage,
            PaginatedResponse<questions::QuestionDto>,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::UserInfo,
            auth::AuthResponse,
            // Categories
            categories::CategoryDto,
            categories::CreateCategoryRequest,
            // Questions
            questions::QuestionDto,
            questions::QuestionDetailDto,
            questions::CategoryRefDto,
            questions::CreateQuestionRequest,
            questions::UpdateQuestionRequest,
            // Answers
            answers::AuthorDto,
            answers::AnswerDto,
            answers::CreateAnswerRequest,
            answers::UpdateAnswerRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User registration, login (JWT), and session info"),
        (name = "Categories", description = "Question categories; creation is admin-only"),
        (name = "Questions", description = "Question CRUD with owner/admin authorization"),
        (name = "Answers", description = "Answers to questions with owner/admin authorization"),
    ),
    info(
        title = "Askboard API",
        version = "1.0.0",
        description = "REST API for the askboard question-and-answer application",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
        repos: repos.clone(),
    };

    // ── Auth routes ────────────────────────────────────────────
    let auth_handler_state = auth::AuthHandlerState {
        repos: repos.clone(),
        jwt_config,
    };

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(auth_handler_state.clone());

    let auth_protected_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // ── Category routes ────────────────────────────────────────
    // Listing is public; creation requires auth + admin. The admin gate is
    // layered inside the auth middleware so identity is resolved first.
    let category_state = categories::CategoryHandlerState {
        repos: repos.clone(),
    };

    let category_routes = Router::new()
        .route("/", get(categories::list_categories))
        .route(
            "/",
            post(categories::create_category)
                .layer(middleware::from_fn(admin_middleware))
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(category_state);

    // ── Question routes ────────────────────────────────────────
    let question_state = questions::QuestionHandlerState {
        repos: repos.clone(),
    };

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route(
            "/",
            post(questions::create_question).layer(middleware::from_fn_with_state(
                auth_state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/category/{category_id}",
            get(questions::list_questions_by_category),
        )
        .route("/{id}", get(questions::get_question))
        .route(
            "/{id}",
            put(questions::update_question)
                .delete(questions::delete_question)
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(question_state);

    // ── Answer routes ──────────────────────────────────────────
    let answer_state = answers::AnswerHandlerState {
        repos: repos.clone(),
    };

    // POST /api/v1/questions/{id}/answers
    let answers_under_questions = Router::new()
        .route("/{id}/answers", post(answers::add_answer))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(answer_state.clone());

    let answer_routes = Router::new()
        .route(
            "/{id}",
            put(answers::update_answer).delete(answers::delete_answer),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(answer_state);

    // ── Health ─────────────────────────────────────────────────
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Categories
        .nest("/api/v1/categories", category_routes)
        // Questions (+ nested answer creation)
        .nest("/api/v1/questions", question_routes)
        .nest("/api/v1/questions", answers_under_questions)
        // Answers (standalone)
        .nest("/api/v1/answers", answer_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
