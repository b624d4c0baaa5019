//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use wishlist_api::AppState;
use wishlist_auth::{JwtDecoder, JwtEncoder};
use wishlist_core::config::AppConfig;
use wishlist_core::types::{UserId, WishListId};
use wishlist_database::{MemoryStore, WishListStore, WishStore};
use wishlist_entity::wish::{CreateWish, Wish};
use wishlist_service::WishListService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for seeding and direct reads
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application backed by an empty memory store
    pub fn new() -> Self {
        let store = MemoryStore::new();
        Self::with_wish_lists(store.clone(), Arc::new(store))
    }

    /// Serve wish lists from `wish_lists`; wishes come from `store`
    pub fn with_wish_lists(store: MemoryStore, wish_lists: Arc<dyn WishListStore>) -> Self {
        let config = AppConfig::default();

        let state = AppState {
            config: Arc::new(config.clone()),
            db_pool: None,
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            wish_list_service: Arc::new(WishListService::new(
                wish_lists,
                Arc::new(store.clone()),
            )),
            started_at: Instant::now(),
        };

        Self {
            router: wishlist_api::build_app(state),
            store,
            encoder: JwtEncoder::new(&config.auth),
            config,
        }
    }

    /// A fresh user and a valid bearer token for them
    pub fn sign_in(&self) -> (UserId, String) {
        let user_id = UserId::new();
        let token = self
            .encoder
            .issue(user_id)
            .expect("Failed to issue token")
            .access_token;
        (user_id, token)
    }

    /// Insert a wish directly; the API has no procedure for it
    pub async fn seed_wish(&self, wish_list_id: WishListId, name: &str) -> Wish {
        WishStore::create(
            &self.store,
            &CreateWish {
                wish_list_id,
                name: name.to_string(),
            },
        )
        .await
        .expect("Failed to seed wish")
    }

    /// Call a mutation and return the response
    pub async fn mutate(&self, procedure: &str, body: Value, token: &str) -> TestResponse {
        self.request("POST", &format!("/api/{procedure}"), Some(body), Some(token))
            .await
    }

    /// Call a query and return the response
    pub async fn query(&self, procedure: &str, query: &str, token: &str) -> TestResponse {
        let path = if query.is_empty() {
            format!("/api/{procedure}")
        } else {
            format!("/api/{procedure}?{query}")
        };
        self.request("GET", &path, None, Some(token)).await
    }

    /// Create a list through the API and return its id
    pub async fn create_list(&self, token: &str, name: &str, description: &str) -> String {
        let response = self
            .mutate(
                "wishList.create",
                serde_json::json!({ "name": name, "description": description }),
                token,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("No id in create response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of a failed call
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
