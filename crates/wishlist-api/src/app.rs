//! Application builder: wires stores, services, and state into an Axum app.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;

use wishlist_auth::JwtDecoder;
use wishlist_core::config::{AppConfig, DatabaseProvider};
use wishlist_core::error::AppError;
use wishlist_database::migration::run_migrations;
use wishlist_database::repositories::{WishListRepository, WishRepository};
use wishlist_database::{DatabasePool, MemoryStore, WishListStore, WishStore};
use wishlist_service::WishListService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Opens the configured store and assembles the shared state.
///
/// With the PostgreSQL provider this connects the pool and, when enabled,
/// applies pending migrations before any request is served.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let (db_pool, wish_lists, wishes): (
        Option<DatabasePool>,
        Arc<dyn WishListStore>,
        Arc<dyn WishStore>,
    ) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let db_pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                run_migrations(db_pool.pool()).await?;
            }
            let wish_lists: Arc<dyn WishListStore> =
                Arc::new(WishListRepository::new(db_pool.pool().clone()));
            let wishes: Arc<dyn WishStore> = Arc::new(WishRepository::new(db_pool.pool().clone()));
            (Some(db_pool), wish_lists, wishes)
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            let store = MemoryStore::new();
            let wish_lists: Arc<dyn WishListStore> = Arc::new(store.clone());
            let wishes: Arc<dyn WishStore> = Arc::new(store);
            (None, wish_lists, wishes)
        }
    };

    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let wish_list_service = Arc::new(WishListService::new(wish_lists, wishes));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        wish_list_service,
        started_at: Instant::now(),
    })
}

/// Runs the wishlist server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        provider = ?config.database.provider,
        "Starting wishlist server..."
    );

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let db_pool = state.db_pool.clone();

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Wishlist server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Wishlist server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
