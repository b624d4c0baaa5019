//! Access log middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs one line per call: procedure, status, and latency.
///
/// Unrouted paths are logged by their raw URI so probing shows up.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let procedure = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().trim_start_matches("/api/").to_string());
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match procedure {
        Some(procedure) => info!(%method, %procedure, status, elapsed_ms, "API call"),
        None => warn!(%method, %path, status, elapsed_ms, "Unrouted request"),
    }

    response
}
