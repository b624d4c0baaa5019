//! Wish list CRUD and cross-list moves with ownership enforcement.

use std::sync::Arc;

use tracing::info;

use wishlist_core::error::AppError;
use wishlist_core::types::{WishId, WishListId};
use wishlist_database::store::{WishListStore, WishStore};
use wishlist_entity::wish::Wish;
use wishlist_entity::wish_list::{CreateWishList, UpdateWishList, WishList};

use super::ownership::OwnershipGuard;
use crate::context::RequestContext;

/// Manages wish lists and the wishes inside them.
#[derive(Clone)]
pub struct WishListService {
    /// Wish list store.
    wish_lists: Arc<dyn WishListStore>,
    /// Wish store.
    wishes: Arc<dyn WishStore>,
    /// Creator check shared by every id-taking operation.
    guard: OwnershipGuard,
}

impl std::fmt::Debug for WishListService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishListService")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

/// Request to create a wish list.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateWishListRequest {
    /// List name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// Request to replace a wish list's name and description.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateWishListRequest {
    /// New name.
    pub name: String,
    /// New description.
    pub description: String,
}

/// Request to move a wish from one list to another.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct MoveWishRequest {
    /// The wish to move.
    pub wish_id: WishId,
    /// The list the caller says the wish is in.
    pub from_wish_list_id: WishListId,
    /// The list to move it to.
    pub to_wish_list_id: WishListId,
}

impl WishListService {
    /// Creates a new wish list service.
    pub fn new(wish_lists: Arc<dyn WishListStore>, wishes: Arc<dyn WishStore>) -> Self {
        let guard = OwnershipGuard::new(Arc::clone(&wish_lists));
        Self {
            wish_lists,
            wishes,
            guard,
        }
    }

    /// Lists every wish list the caller created.
    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<WishList>, AppError> {
        self.wish_lists.find_by_creator(ctx.user_id).await
    }

    /// Gets a wish list by id.
    ///
    /// Returns `None` when the list disappeared between the ownership check
    /// and the fetch.
    pub async fn get_by_id(
        &self,
        ctx: &RequestContext,
        id: WishListId,
    ) -> Result<Option<WishList>, AppError> {
        self.guard.assert_ownership(ctx, id).await?;
        self.wish_lists.find_by_id(id).await
    }

    /// Lists the wishes in a list. A missing id is `NotFound`, never "all wishes".
    pub async fn get_wishes(
        &self,
        ctx: &RequestContext,
        id: Option<WishListId>,
    ) -> Result<Vec<Wish>, AppError> {
        let id = id.ok_or_else(|| AppError::not_found("Wish list id is required"))?;
        self.guard.assert_ownership(ctx, id).await?;
        self.wishes.find_by_wish_list(id).await
    }

    /// Creates a wish list owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateWishListRequest,
    ) -> Result<WishList, AppError> {
        let wish_list = self
            .wish_lists
            .create(&CreateWishList {
                creator_id: ctx.user_id,
                name: req.name,
                description: req.description,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            wish_list_id = %wish_list.id,
            "Wish list created"
        );

        Ok(wish_list)
    }

    /// Replaces name and description of a list the caller owns.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: WishListId,
        req: UpdateWishListRequest,
    ) -> Result<WishList, AppError> {
        self.guard.assert_ownership(ctx, id).await?;

        let wish_list = self
            .wish_lists
            .update(&UpdateWishList {
                id,
                name: req.name,
                description: req.description,
            })
            .await?;

        info!(user_id = %ctx.user_id, wish_list_id = %id, "Wish list updated");

        Ok(wish_list)
    }

    /// Deletes a list the caller owns and returns it as it was.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        id: WishListId,
    ) -> Result<WishList, AppError> {
        self.guard.assert_ownership(ctx, id).await?;

        let removed = self.wish_lists.delete(id).await?;

        info!(user_id = %ctx.user_id, wish_list_id = %id, "Wish list deleted");

        Ok(removed)
    }

    /// Moves a wish into another list.
    ///
    /// Both lists must belong to the caller; they are checked in order, source
    /// first. The wish's current membership is not compared with
    /// `from_wish_list_id`.
    pub async fn move_wish_to_wish_list(
        &self,
        ctx: &RequestContext,
        req: MoveWishRequest,
    ) -> Result<Wish, AppError> {
        self.guard.assert_ownership(ctx, req.from_wish_list_id).await?;
        self.guard.assert_ownership(ctx, req.to_wish_list_id).await?;

        let wish = self
            .wishes
            .reassign(req.wish_id, req.to_wish_list_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            wish_id = %req.wish_id,
            from = %req.from_wish_list_id,
            to = %req.to_wish_list_id,
            "Wish moved"
        );

        Ok(wish)
    }
}
