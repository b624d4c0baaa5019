//! Wish list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishlist_core::types::{UserId, WishListId};

/// A named, described collection of wishes owned by exactly one creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishList {
    /// Unique wish list identifier.
    pub id: WishListId,
    /// List name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// The user who created the list. Never changes after creation.
    pub creator_id: UserId,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// When the name or description last changed.
    pub updated_at: DateTime<Utc>,
}

impl WishList {
    /// Check whether `user_id` created this list.
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.creator_id == user_id
    }
}

/// Data required to create a new wish list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWishList {
    /// The owning user.
    pub creator_id: UserId,
    /// List name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// Full replacement of a wish list's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWishList {
    /// The list to update.
    pub id: WishListId,
    /// New name.
    pub name: String,
    /// New description.
    pub description: String,
}
