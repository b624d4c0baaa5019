//! Health check handlers.

use axum::Json;
use axum::extract::State;

use wishlist_core::config::DatabaseProvider;

use crate::dto::response::{ApiResponse, HealthResponse, ReadinessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/ready
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReadinessResponse>>, ApiError> {
    let database = match state.config.database.provider {
        DatabaseProvider::Postgres => "postgres",
        DatabaseProvider::Memory => "memory",
    };

    if let Some(pool) = &state.db_pool {
        pool.health_check().await?;
    }

    Ok(Json(ApiResponse::ok(ReadinessResponse {
        status: "ready".to_string(),
        database: database.to_string(),
    })))
}
