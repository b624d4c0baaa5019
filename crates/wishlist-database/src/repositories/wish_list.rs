//! Wish list repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use wishlist_core::error::{AppError, ErrorKind};
use wishlist_core::result::AppResult;
use wishlist_core::types::{UserId, WishListId};
use wishlist_entity::wish_list::{CreateWishList, UpdateWishList, WishList};

use crate::store::WishListStore;

/// PostgreSQL-backed wish list store.
#[derive(Debug, Clone)]
pub struct WishListRepository {
    pool: PgPool,
}

impl WishListRepository {
    /// Create a new wish list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishListStore for WishListRepository {
    async fn find_by_id(&self, id: WishListId) -> AppResult<Option<WishList>> {
        sqlx::query_as::<_, WishList>("SELECT * FROM wish_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find wish list", e))
    }

    async fn find_by_creator(&self, creator_id: UserId) -> AppResult<Vec<WishList>> {
        sqlx::query_as::<_, WishList>(
            "SELECT * FROM wish_lists WHERE creator_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(creator_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list wish lists", e))
    }

    async fn create(&self, data: &CreateWishList) -> AppResult<WishList> {
        sqlx::query_as::<_, WishList>(
            "INSERT INTO wish_lists (id, name, description, creator_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(WishListId::new())
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let unknown_creator = matches!(
                &e,
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation()
            );
            let message = if unknown_creator {
                format!("Creator {} does not exist", data.creator_id)
            } else {
                "Failed to create wish list".to_string()
            };
            AppError::with_source(ErrorKind::Database, message, e)
        })
    }

    async fn update(&self, data: &UpdateWishList) -> AppResult<WishList> {
        sqlx::query_as::<_, WishList>(
            "UPDATE wish_lists SET name = $2, description = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update wish list", e))?
        .ok_or_else(|| AppError::not_found(format!("Wish list {} not found", data.id)))
    }

    async fn delete(&self, id: WishListId) -> AppResult<WishList> {
        sqlx::query_as::<_, WishList>("DELETE FROM wish_lists WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete wish list", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Wish list {id} not found")))
    }
}
