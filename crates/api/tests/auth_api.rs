//! HTTP-level integration tests for signup, login and token handling.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, register, signup, TEST_PASSWORD};
use jotter_api::auth::jwt::generate_access_token;
use jotter_db::memory::MemoryStore;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_signup_returns_created_user_without_hash() {
    let app = common::build_test_app(MemoryStore::new());

    let body = serde_json::json!({ "username": "alice", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "alice");
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["created_at"].is_string());
    assert!(json["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let app = common::build_test_app(MemoryStore::new());
    signup(&app, "alice").await;

    let body = serde_json::json!({ "username": "alice", "password": "another-password" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let app = common::build_test_app(MemoryStore::new());

    let body = serde_json::json!({ "username": "alice", "password": "short" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_signup_rejects_bad_username() {
    let app = common::build_test_app(MemoryStore::new());

    let body = serde_json::json!({ "username": "a b", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = common::build_test_app(MemoryStore::new());
    let id = signup(&app, "alice").await;

    let body = serde_json::json!({ "username": "alice", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["token_type"], "Bearer");
    assert_eq!(json["data"]["expires_in"], 3600);
    assert_eq!(json["data"]["user"]["id"], id);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let app = common::build_test_app(MemoryStore::new());
    signup(&app, "alice").await;

    let wrong_pw = serde_json::json!({ "username": "alice", "password": "not-the-password" });
    let response = post_json(app.clone(), "/api/v1/auth/login", wrong_pw).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw_json = body_json(response).await;

    let unknown = serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", unknown).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_json = body_json(response).await;

    assert_eq!(wrong_pw_json, unknown_json);
    assert_eq!(unknown_json["error"], "Invalid username or password");
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_me_returns_caller() {
    let app = common::build_test_app(MemoryStore::new());
    let (id, token) = register(&app, "alice").await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["username"], "alice");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = common::build_test_app(MemoryStore::new());

    let response = get(app, "/api/v1/notes").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = common::build_test_app(MemoryStore::new());

    let response = get_auth(app, "/api/v1/notes", "definitely-not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = common::build_test_app(MemoryStore::new());
    signup(&app, "alice").await;

    let mut foreign = common::test_config().jwt;
    foreign.secret = "some-other-secret".to_string();
    let token = generate_access_token(1, "alice", &foreign).unwrap();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_vanished_user_is_unauthorized() {
    let app = common::build_test_app(MemoryStore::new());
    let token = generate_access_token(999, "nobody", &common::test_config().jwt).unwrap();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
