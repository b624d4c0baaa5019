//! Integration tests for bearer token authentication.

mod helpers;

use http::StatusCode;
use wishlist_auth::JwtEncoder;
use wishlist_core::config::AuthConfig;
use wishlist_core::types::UserId;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/wishList.getAll", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_malformed_header_is_unauthorized() {
    let app = helpers::TestApp::new();

    let req = http::Request::builder()
        .uri("/api/wishList.getAll")
        .header("Authorization", "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = helpers::TestApp::new();
    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "a-completely-different-secret".to_string(),
        ..AuthConfig::default()
    });
    let token = foreign.issue(UserId::new()).unwrap().access_token;

    let response = app.query("wishList.getAll", "", &token).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_is_checked_before_input() {
    let app = helpers::TestApp::new();

    // Invalid body and no token: the caller learns nothing about the input.
    let response = app
        .request(
            "POST",
            "/api/wishList.create",
            Some(serde_json::json!({ "name": 42 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();

    let response = app.query("wishList.getAll", "", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = helpers::TestApp::new();

    let live = app.request("GET", "/api/health", None, None).await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.body["data"]["status"], "ok");

    let ready = app.request("GET", "/api/health/ready", None, None).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["data"]["database"], "memory");
}
