//! Wish repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use wishlist_core::error::{AppError, ErrorKind};
use wishlist_core::result::AppResult;
use wishlist_core::types::{WishId, WishListId};
use wishlist_entity::wish::{CreateWish, Wish};

use crate::store::WishStore;

/// PostgreSQL-backed wish store.
#[derive(Debug, Clone)]
pub struct WishRepository {
    pool: PgPool,
}

impl WishRepository {
    /// Create a new wish repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishStore for WishRepository {
    async fn find_by_id(&self, id: WishId) -> AppResult<Option<Wish>> {
        sqlx::query_as::<_, Wish>("SELECT * FROM wishes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find wish", e))
    }

    async fn find_by_wish_list(&self, wish_list_id: WishListId) -> AppResult<Vec<Wish>> {
        sqlx::query_as::<_, Wish>(
            "SELECT * FROM wishes WHERE wish_list_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(wish_list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list wishes", e))
    }

    async fn create(&self, data: &CreateWish) -> AppResult<Wish> {
        sqlx::query_as::<_, Wish>(
            "INSERT INTO wishes (id, wish_list_id, name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(WishId::new())
        .bind(data.wish_list_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create wish", e))
    }

    async fn reassign(&self, id: WishId, wish_list_id: WishListId) -> AppResult<Wish> {
        sqlx::query_as::<_, Wish>(
            "UPDATE wishes SET wish_list_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(wish_list_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move wish", e))?
        .ok_or_else(|| AppError::not_found(format!("Wish {id} not found")))
    }
}
