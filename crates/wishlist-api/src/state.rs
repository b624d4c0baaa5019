//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use wishlist_auth::JwtDecoder;
use wishlist_core::config::AppConfig;
use wishlist_database::DatabasePool;
use wishlist_service::WishListService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool; `None` when running on the memory store
    pub db_pool: Option<DatabasePool>,
    /// Session token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Wish list operations
    pub wish_list_service: Arc<WishListService>,
    /// Process start, for the liveness probe
    pub started_at: Instant,
}
