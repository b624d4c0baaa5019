//! In-process store for development and tests.
//!
//! Mirrors the PostgreSQL schema's behaviour where the service can observe
//! it: wishes cascade with their list, and a wish cannot point at a list
//! that does not exist. Creator ids are not checked against a users table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use wishlist_core::error::AppError;
use wishlist_core::result::AppResult;
use wishlist_core::types::{UserId, WishId, WishListId};
use wishlist_entity::wish::{CreateWish, Wish};
use wishlist_entity::wish_list::{CreateWishList, UpdateWishList, WishList};

use crate::store::{WishListStore, WishStore};

#[derive(Debug, Default)]
struct Tables {
    wish_lists: Vec<WishList>,
    wishes: Vec<Wish>,
}

impl Tables {
    fn has_wish_list(&self, id: WishListId) -> bool {
        self.wish_lists.iter().any(|l| l.id == id)
    }
}

/// Memory-backed implementation of both store traits.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishListStore for MemoryStore {
    async fn find_by_id(&self, id: WishListId) -> AppResult<Option<WishList>> {
        let tables = self.tables.read().await;
        Ok(tables.wish_lists.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_creator(&self, creator_id: UserId) -> AppResult<Vec<WishList>> {
        let tables = self.tables.read().await;
        Ok(tables
            .wish_lists
            .iter()
            .filter(|l| l.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateWishList) -> AppResult<WishList> {
        let now = Utc::now();
        let wish_list = WishList {
            id: WishListId::new(),
            name: data.name.clone(),
            description: data.description.clone(),
            creator_id: data.creator_id,
            created_at: now,
            updated_at: now,
        };

        self.tables.write().await.wish_lists.push(wish_list.clone());
        Ok(wish_list)
    }

    async fn update(&self, data: &UpdateWishList) -> AppResult<WishList> {
        let mut tables = self.tables.write().await;
        let wish_list = tables
            .wish_lists
            .iter_mut()
            .find(|l| l.id == data.id)
            .ok_or_else(|| AppError::not_found(format!("Wish list {} not found", data.id)))?;

        wish_list.name = data.name.clone();
        wish_list.description = data.description.clone();
        wish_list.updated_at = Utc::now();
        Ok(wish_list.clone())
    }

    async fn delete(&self, id: WishListId) -> AppResult<WishList> {
        let mut tables = self.tables.write().await;
        let index = tables
            .wish_lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| AppError::not_found(format!("Wish list {id} not found")))?;

        let removed = tables.wish_lists.remove(index);
        let before = tables.wishes.len();
        tables.wishes.retain(|w| w.wish_list_id != id);
        debug!(
            wish_list_id = %id,
            cascaded = before - tables.wishes.len(),
            "Removed wish list from memory store"
        );
        Ok(removed)
    }
}

#[async_trait]
impl WishStore for MemoryStore {
    async fn find_by_id(&self, id: WishId) -> AppResult<Option<Wish>> {
        let tables = self.tables.read().await;
        Ok(tables.wishes.iter().find(|w| w.id == id).cloned())
    }

    async fn find_by_wish_list(&self, wish_list_id: WishListId) -> AppResult<Vec<Wish>> {
        let tables = self.tables.read().await;
        Ok(tables
            .wishes
            .iter()
            .filter(|w| w.wish_list_id == wish_list_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateWish) -> AppResult<Wish> {
        let mut tables = self.tables.write().await;
        if !tables.has_wish_list(data.wish_list_id) {
            return Err(AppError::database(format!(
                "Wish list {} does not exist",
                data.wish_list_id
            )));
        }

        let now = Utc::now();
        let wish = Wish {
            id: WishId::new(),
            wish_list_id: data.wish_list_id,
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.wishes.push(wish.clone());
        Ok(wish)
    }

    async fn reassign(&self, id: WishId, wish_list_id: WishListId) -> AppResult<Wish> {
        let mut tables = self.tables.write().await;
        if !tables.has_wish_list(wish_list_id) {
            return Err(AppError::database(format!(
                "Wish list {wish_list_id} does not exist"
            )));
        }

        let wish = tables
            .wishes
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::not_found(format!("Wish {id} not found")))?;

        wish.wish_list_id = wish_list_id;
        wish.updated_at = Utc::now();
        Ok(wish.clone())
    }
}
