//! Shared test harness: full router over an in-memory SQLite database

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use askboard::domain::RepositoryProvider;
use askboard::infrastructure::crypto::jwt::JwtConfig;
use askboard::infrastructure::database::entities::user;
use askboard::infrastructure::database::migrator::Migrator;
use askboard::{create_api_router, SeaOrmRepositoryProvider};

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build the full application against a fresh in-memory database.
///
/// A single pooled connection keeps the in-memory database alive and shared
/// across the whole test.
pub async fn spawn_app() -> TestApp {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let jwt_config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_days: 7,
        issuer: "askboard".to_string(),
    };

    TestApp {
        router: create_api_router(repos, db.clone(), jwt_config),
        db,
    }
}

/// Send a request and return `(status, parsed JSON body)`
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Register a user and return the issued token
pub async fn register(app: &Router, username: &str, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Flip the admin flag directly in the store. Tokens issued before the
/// promotion pick it up on their next request.
pub async fn make_admin(db: &DatabaseConnection, email: &str) {
    let u = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .unwrap()
        .expect("user to promote exists");

    let mut active: user::ActiveModel = u.into();
    active.is_admin = Set(true);
    active.update(db).await.unwrap();
}

/// Register an admin and create a category; returns `(admin_token, category_id)`
pub async fn seed_category(app: &TestApp, name: &str) -> (String, String) {
    let email = format!("{name}-admin@example.com");
    let token = register(&app.router, &format!("{name}-admin"), &email, "password1").await;
    make_admin(&app.db, &email).await;

    let (status, body) = request(
        &app.router,
        "POST",
        "/api/v1/categories",
        Some(&token),
        Some(serde_json::json!({ "name": name, "description": "seeded" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "seed category failed: {body}");
    (token, body["id"].as_str().unwrap().to_string())
}
