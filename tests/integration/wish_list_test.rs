//! Integration tests for the wish list procedures.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use http::StatusCode;
use serde_json::json;

use wishlist_core::result::AppResult;
use wishlist_core::types::{UserId, WishListId};
use wishlist_database::{MemoryStore, WishListStore};
use wishlist_entity::wish_list::{CreateWishList, UpdateWishList, WishList};

/// Answers the ownership read, then reports the list deleted.
struct VanishingLists {
    inner: MemoryStore,
    reads: AtomicUsize,
}

#[async_trait]
impl WishListStore for VanishingLists {
    async fn find_by_id(&self, id: WishListId) -> AppResult<Option<WishList>> {
        if self.reads.fetch_add(1, Ordering::SeqCst) > 0 {
            return Ok(None);
        }
        WishListStore::find_by_id(&self.inner, id).await
    }

    async fn find_by_creator(&self, creator_id: UserId) -> AppResult<Vec<WishList>> {
        self.inner.find_by_creator(creator_id).await
    }

    async fn create(&self, data: &CreateWishList) -> AppResult<WishList> {
        WishListStore::create(&self.inner, data).await
    }

    async fn update(&self, data: &UpdateWishList) -> AppResult<WishList> {
        self.inner.update(data).await
    }

    async fn delete(&self, id: WishListId) -> AppResult<WishList> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn test_birthday_and_holiday_flow() {
    let app = helpers::TestApp::new();
    let (alice_id, alice) = app.sign_in();
    let (_, bob) = app.sign_in();

    let birthday = app.create_list(&alice, "Birthday", "2024").await;

    let all = app.query("wishList.getAll", "", &alice).await;
    assert_eq!(all.status, StatusCode::OK);
    let lists = all.body["data"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["id"], birthday.as_str());
    assert_eq!(lists[0]["name"], "Birthday");
    assert_eq!(lists[0]["creatorId"], alice_id.to_string());

    let peek = app
        .query("wishList.getById", &format!("id={birthday}"), &bob)
        .await;
    assert_eq!(peek.status, StatusCode::FORBIDDEN);
    assert_eq!(peek.error_code(), "FORBIDDEN");

    let updated = app
        .mutate(
            "wishList.update",
            json!({ "id": birthday, "name": "Birthday", "description": "2025" }),
            &alice,
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["description"], "2025");

    let holiday = app.create_list(&alice, "Holiday", "").await;
    let birthday_id: WishListId = birthday.parse().unwrap();
    let w1 = app.seed_wish(birthday_id, "Bike").await;

    let moved = app
        .mutate(
            "wishList.moveWishToWishList",
            json!({
                "wishId": w1.id,
                "fromWishListId": birthday,
                "toWishListId": holiday,
            }),
            &alice,
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK, "{:?}", moved.body);
    assert_eq!(moved.body["data"]["wishListId"], holiday.as_str());

    let in_holiday = app
        .query("wishList.getWishes", &format!("id={holiday}"), &alice)
        .await;
    let in_birthday = app
        .query("wishList.getWishes", &format!("id={birthday}"), &alice)
        .await;
    let w1_id = w1.id.to_string();
    assert!(
        in_holiday.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w["id"] == w1_id.as_str())
    );
    assert!(
        in_birthday.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|w| w["id"] != w1_id.as_str())
    );
}

#[tokio::test]
async fn test_create_then_get_by_id() {
    let app = helpers::TestApp::new();
    let (user_id, token) = app.sign_in();

    let id = app.create_list(&token, "Garden", "Tools and seeds").await;

    let response = app
        .query("wishList.getById", &format!("id={id}"), &token)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Garden");
    assert_eq!(response.body["data"]["description"], "Tools and seeds");
    assert_eq!(response.body["data"]["creatorId"], user_id.to_string());
}

#[tokio::test]
async fn test_delete_returns_list_then_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();
    let id = app.create_list(&token, "Birthday", "2024").await;

    let deleted = app
        .mutate("wishList.delete", json!({ "id": id }), &token)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["name"], "Birthday");

    let response = app
        .query("wishList.getById", &format!("id={id}"), &token)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_by_id_list_deleted_after_ownership_check_is_not_found() {
    let store = MemoryStore::new();
    let lists = VanishingLists {
        inner: store.clone(),
        reads: AtomicUsize::new(0),
    };
    let app = helpers::TestApp::with_wish_lists(store, Arc::new(lists));
    let (_, token) = app.sign_in();
    let id = app.create_list(&token, "Birthday", "2024").await;

    let response = app
        .query("wishList.getById", &format!("id={id}"), &token)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_wishes_without_id_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();
    app.create_list(&token, "Birthday", "2024").await;

    let response = app.query("wishList.getWishes", "", &token).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_wishes_with_empty_id_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();
    app.create_list(&token, "Birthday", "2024").await;

    let response = app.query("wishList.getWishes", "id=", &token).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_all_is_empty_for_new_user() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in();
    let (_, bob) = app.sign_in();
    app.create_list(&alice, "Birthday", "2024").await;

    let response = app.query("wishList.getAll", "", &bob).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();

    let response = app
        .mutate("wishList.create", json!({ "name": "No description" }), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_overlong_name_is_validation_error() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();

    let response = app
        .mutate(
            "wishList.create",
            json!({ "name": "x".repeat(256), "description": "" }),
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();

    let response = app
        .query("wishList.getById", "id=not-a-uuid", &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_uuid_id_is_rejected_before_lookup() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();

    for procedure in ["wishList.getById", "wishList.getWishes"] {
        let response = app.query(procedure, "id=clxyz123", &token).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{procedure}");
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_memory_provider_state_serves_requests() {
    let config = wishlist_core::config::AppConfig::default();
    let encoder = wishlist_auth::JwtEncoder::new(&config.auth);
    let token = encoder
        .issue(wishlist_core::types::UserId::new())
        .unwrap()
        .access_token;

    let state = wishlist_api::build_state(config).await.unwrap();
    assert!(state.db_pool.is_none());
    let router = wishlist_api::build_app(state);

    let req = http::Request::builder()
        .uri("/api/wishList.getAll")
        .header("Authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(router, req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
