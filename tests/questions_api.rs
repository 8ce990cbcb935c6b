//! End-to-end tests for categories and questions, including the
//! ownership/admin authorization rules

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{make_admin, register, request, seed_category, spawn_app};

#[tokio::test]
async fn category_creation_requires_admin() {
    let app = spawn_app().await;
    let token = register(&app.router, "bob", "bob@example.com", "password1").await;

    let (status, body) = request(
        &app.router,
        "POST",
        "/api/v1/categories",
        Some(&token),
        Some(json!({ "name": "rust", "description": "systems" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized as admin");

    // Unauthenticated creation does not even reach the admin gate
    let (status, body) = request(
        &app.router,
        "POST",
        "/api/v1/categories",
        None,
        Some(json!({ "name": "rust" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token, authorization denied");
}

#[tokio::test]
async fn categories_are_listed_publicly_sorted_by_name() {
    let app = spawn_app().await;
    let (admin_token, _) = seed_category(&app, "zebra").await;

    let (status, _) = request(
        &app.router,
        "POST",
        "/api/v1/categories",
        Some(&admin_token),
        Some(json!({ "name": "alpha", "description": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app.router, "GET", "/api/v1/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "zebra"]);
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let app = spawn_app().await;
    let (admin_token, _) = seed_category(&app, "rust").await;

    let (status, _) = request(
        &app.router,
        "POST",
        "/api/v1/categories",
        Some(&admin_token),
        Some(json!({ "name": "rust", "description": "again" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_question_requires_existing_category() {
    let app = spawn_app().await;
    let token = register(&app.router, "alice", "alice@example.com", "password1").await;

    let (status, body) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&token),
        Some(json!({
            "title": "How do I?",
            "content": "Details",
            "category_id": "missing-category",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Question category does not exist");
}

#[tokio::test]
async fn question_detail_hydrates_author_and_category() {
    let app = spawn_app().await;
    let (_, category_id) = seed_category(&app, "rust").await;
    let token = register(&app.router, "alice", "alice@example.com", "password1").await;

    let (status, created) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&token),
        Some(json!({
            "title": "Borrow checker?",
            "content": "Why does this not compile?",
            "category_id": category_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["author"]["username"], "alice");
    assert_eq!(created["category"]["name"], "rust");
    assert_eq!(created["views"], 0);
    assert_eq!(created["votes"], 0);

    let id = created["id"].as_str().unwrap();
    let (status, detail) = request(
        &app.router,
        "GET",
        &format!("/api/v1/questions/{id}"),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Borrow checker?");
    assert_eq!(detail["author"]["username"], "alice");
    assert_eq!(detail["answers"], json!([]));
}

#[tokio::test]
async fn unknown_question_is_404() {
    let app = spawn_app().await;

    let (status, body) = request(&app.router, "GET", "/api/v1/questions/nope", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Question not found");
}

#[tokio::test]
async fn listing_filters_by_category_and_paginates() {
    let app = spawn_app().await;
    let (_, rust_id) = seed_category(&app, "rust").await;
    let (_, js_id) = seed_category(&app, "javascript").await;
    let token = register(&app.router, "alice", "alice@example.com", "password1").await;

    for (i, cat) in [(1, &rust_id), (2, &rust_id), (3, &js_id)] {
        let (status, _) = request(
            &app.router,
            "POST",
            "/api/v1/questions",
            Some(&token),
            Some(json!({
                "title": format!("Question {i}"),
                "content": "body",
                "category_id": cat,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = request(
        &app.router,
        "GET",
        &format!("/api/v1/questions?category={rust_id}&page=1&limit=1"),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);

    // Dedicated category route, newest first
    let (status, by_cat) = request(
        &app.router,
        "GET",
        &format!("/api/v1/questions/category/{rust_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_cat.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_matches_title_and_content() {
    let app = spawn_app().await;
    let (_, category_id) = seed_category(&app, "rust").await;
    let token = register(&app.router, "alice", "alice@example.com", "password1").await;

    for (title, content) in [
        ("Lifetime puzzle", "generic body"),
        ("Other topic", "mentions lifetime in content"),
        ("Unrelated", "nothing here"),
    ] {
        request(
            &app.router,
            "POST",
            "/api/v1/questions",
            Some(&token),
            Some(json!({ "title": title, "content": content, "category_id": category_id })),
        )
        .await;
    }

    let (status, page) = request(
        &app.router,
        "GET",
        "/api/v1/questions?search=lifetime",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
}

#[tokio::test]
async fn update_is_owner_only_even_for_admins() {
    let app = spawn_app().await;
    let (admin_token, category_id) = seed_category(&app, "rust").await;
    let alice = register(&app.router, "alice", "alice@example.com", "password1").await;
    let bob = register(&app.router, "bob", "bob@example.com", "password1").await;

    let (_, created) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&alice),
        Some(json!({ "title": "Mine", "content": "body", "category_id": category_id })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Non-owner is denied with the product's exact message
    let (status, body) = request(
        &app.router,
        "PUT",
        &format!("/api/v1/questions/{id}"),
        Some(&bob),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "Sorry you dont have permission to edit this question"
    );

    // Admin override deliberately does NOT apply to updates
    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/v1/questions/{id}"),
        Some(&admin_token),
        Some(json!({ "title": "Admin edit" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Owner succeeds; untouched fields keep their value
    let (status, updated) = request(
        &app.router,
        "PUT",
        &format!("/api/v1/questions/{id}"),
        Some(&alice),
        Some(json!({ "title": "Mine, edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Mine, edited");
    assert_eq!(updated["content"], "body");
}

#[tokio::test]
async fn update_rejects_unknown_category_with_400() {
    let app = spawn_app().await;
    let (_, category_id) = seed_category(&app, "rust").await;
    let alice = register(&app.router, "alice", "alice@example.com", "password1").await;

    let (_, created) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&alice),
        Some(json!({ "title": "Mine", "content": "body", "category_id": category_id })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = request(
        &app.router,
        "PUT",
        &format!("/api/v1/questions/{id}"),
        Some(&alice),
        Some(json!({ "category_id": "missing" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The question category does not exist");
}

#[tokio::test]
async fn delete_admits_owner_or_admin() {
    let app = spawn_app().await;
    let (admin_token, category_id) = seed_category(&app, "rust").await;
    let alice = register(&app.router, "alice", "alice@example.com", "password1").await;
    let bob = register(&app.router, "bob", "bob@example.com", "password1").await;

    let (_, created) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&alice),
        Some(json!({ "title": "Mine", "content": "body", "category_id": category_id })),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    // An answer exists so the cascade is observable
    let (status, _) = request(
        &app.router,
        "POST",
        &format!("/api/v1/questions/{id}/answers"),
        Some(&bob),
        Some(json!({ "content": "An answer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Non-owner non-admin is denied
    let (status, body) = request(
        &app.router,
        "DELETE",
        &format!("/api/v1/questions/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized to delete this question");

    // Admin deletes another user's question
    let (status, body) = request(
        &app.router,
        "DELETE",
        &format!("/api/v1/questions/{id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Question removed");

    // Question and its answers are gone
    let (status, _) = request(
        &app.router,
        "GET",
        &format!("/api/v1/questions/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
    let leftover = askboard::infrastructure::database::entities::answer::Entity::find()
        .filter(
            askboard::infrastructure::database::entities::answer::Column::QuestionId.eq(id.clone()),
        )
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(leftover, 0);
}

#[tokio::test]
async fn privilege_change_takes_effect_without_reissuing_token() {
    let app = spawn_app().await;
    let (_, category_id) = seed_category(&app, "rust").await;
    let alice = register(&app.router, "alice", "alice@example.com", "password1").await;
    let bob = register(&app.router, "bob", "bob@example.com", "password1").await;

    let (_, created) = request(
        &app.router,
        "POST",
        "/api/v1/questions",
        Some(&alice),
        Some(json!({ "title": "Mine", "content": "body", "category_id": category_id })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Bob's token predates any privilege: delete is denied
    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/v1/questions/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Promote bob in the store; identity is re-read per request, so the SAME
    // token now carries admin authority
    make_admin(&app.db, "bob@example.com").await;

    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/v1/questions/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
