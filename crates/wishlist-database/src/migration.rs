//! Embedded schema migrations for the `users`, `wish_lists`, and `wishes` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use wishlist_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every migration the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(
        bundled = MIGRATOR.iter().count(),
        "Applying database migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!("Database schema is up to date");
    Ok(())
}
