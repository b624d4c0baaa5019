//! Wish entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishlist_core::types::{WishId, WishListId};

/// An item that belongs to exactly one wish list at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    /// Unique wish identifier.
    pub id: WishId,
    /// The list this wish currently belongs to.
    pub wish_list_id: WishListId,
    /// Short label.
    pub name: String,
    /// When the wish was created.
    pub created_at: DateTime<Utc>,
    /// When the wish last changed (including moves).
    pub updated_at: DateTime<Utc>,
}

/// Data required to add a wish to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWish {
    /// Target list.
    pub wish_list_id: WishListId,
    /// Short label.
    pub name: String,
}
