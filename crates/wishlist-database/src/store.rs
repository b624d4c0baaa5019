//! Store traits: the typed query contract over wish lists and wishes.
//!
//! Services depend on these traits rather than on a concrete backend, so the
//! same handler set runs against PostgreSQL or the in-memory store.

use async_trait::async_trait;

use wishlist_core::result::AppResult;
use wishlist_core::types::{UserId, WishId, WishListId};
use wishlist_entity::wish::{CreateWish, Wish};
use wishlist_entity::wish_list::{CreateWishList, UpdateWishList, WishList};

/// Persistence operations on wish lists.
#[async_trait]
pub trait WishListStore: Send + Sync + 'static {
    /// Find a wish list by primary key.
    async fn find_by_id(&self, id: WishListId) -> AppResult<Option<WishList>>;

    /// All wish lists created by `creator_id`, oldest first.
    async fn find_by_creator(&self, creator_id: UserId) -> AppResult<Vec<WishList>>;

    /// Insert a new wish list and return it.
    async fn create(&self, data: &CreateWishList) -> AppResult<WishList>;

    /// Overwrite name and description. Fails with `NotFound` if the row is gone.
    async fn update(&self, data: &UpdateWishList) -> AppResult<WishList>;

    /// Delete a wish list, returning the row as it was before deletion.
    /// Fails with `NotFound` if the row is gone. Wishes in the list go with it.
    async fn delete(&self, id: WishListId) -> AppResult<WishList>;
}

/// Persistence operations on wishes.
#[async_trait]
pub trait WishStore: Send + Sync + 'static {
    /// Find a wish by primary key.
    async fn find_by_id(&self, id: WishId) -> AppResult<Option<Wish>>;

    /// All wishes whose list reference equals `wish_list_id`, oldest first.
    async fn find_by_wish_list(&self, wish_list_id: WishListId) -> AppResult<Vec<Wish>>;

    /// Insert a new wish and return it.
    async fn create(&self, data: &CreateWish) -> AppResult<Wish>;

    /// Point a wish at a different list. Fails with `NotFound` if the wish is
    /// gone; a missing target list is a persistence failure.
    async fn reassign(&self, id: WishId, wish_list_id: WishListId) -> AppResult<Wish>;
}
