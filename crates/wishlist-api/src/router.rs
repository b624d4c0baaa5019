//! Route definitions for the wishlist HTTP API.
//!
//! Procedures are mounted under `/api` by their dotted names. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.
//!
//! Ids are UUIDs. An id that does not parse as one (`?id=clxyz123`) is
//! rejected with `400 VALIDATION_ERROR` before any lookup, where a
//! well-formed but unknown id gets `404 NOT_FOUND`. An empty `?id=` on
//! `getWishes` counts as omitted and is `404 NOT_FOUND`.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(wish_list_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Wish list procedures: queries are GET, mutations are POST.
fn wish_list_routes() -> Router<AppState> {
    Router::new()
        .route("/wishList.getAll", get(handlers::wish_list::get_all))
        .route("/wishList.getById", get(handlers::wish_list::get_by_id))
        .route("/wishList.getWishes", get(handlers::wish_list::get_wishes))
        .route("/wishList.create", post(handlers::wish_list::create))
        .route("/wishList.update", post(handlers::wish_list::update))
        .route("/wishList.delete", post(handlers::wish_list::delete))
        .route(
            "/wishList.moveWishToWishList",
            post(handlers::wish_list::move_wish_to_wish_list),
        )
}

/// Liveness and readiness probes (no auth)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
