//! Ownership guard: only a list's creator may read or change it.

use std::sync::Arc;

use tracing::warn;

use wishlist_core::error::AppError;
use wishlist_core::types::WishListId;
use wishlist_database::store::WishListStore;
use wishlist_entity::wish_list::WishList;

use crate::context::RequestContext;

/// Verifies that the caller created a given wish list.
#[derive(Clone)]
pub struct OwnershipGuard {
    wish_lists: Arc<dyn WishListStore>,
}

impl std::fmt::Debug for OwnershipGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnershipGuard").finish_non_exhaustive()
    }
}

impl OwnershipGuard {
    /// Creates a guard reading through the given store.
    pub fn new(wish_lists: Arc<dyn WishListStore>) -> Self {
        Self { wish_lists }
    }

    /// Loads the list and checks its creator against the caller.
    ///
    /// Fails with `NotFound` if no list has this id and with `Forbidden` if
    /// the list belongs to someone else. Issues exactly one read.
    pub async fn assert_ownership(
        &self,
        ctx: &RequestContext,
        wish_list_id: WishListId,
    ) -> Result<WishList, AppError> {
        let wish_list = self
            .wish_lists
            .find_by_id(wish_list_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Wish list {wish_list_id} not found")))?;

        if !wish_list.is_created_by(ctx.user_id) {
            warn!(
                user_id = %ctx.user_id,
                wish_list_id = %wish_list_id,
                "Wish list access denied"
            );
            return Err(AppError::forbidden(
                "You are not the creator of this wish list",
            ));
        }

        Ok(wish_list)
    }
}
