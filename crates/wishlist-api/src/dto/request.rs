//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use wishlist_core::types::{WishId, WishListId};

/// Maximum wish list name length, in characters.
pub const MAX_NAME_LENGTH: usize = 255;
/// Maximum wish list description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// `?id=` for procedures that require a list id.
///
/// Must be a UUID; anything else fails extraction with `VALIDATION_ERROR`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WishListIdQuery {
    /// Wish list id.
    pub id: WishListId,
}

/// `?id=` for procedures where the id may be omitted.
///
/// A bare `?id=` counts as omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OptionalWishListIdQuery {
    /// Wish list id, if given.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<WishListId>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<WishListId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Create wish list request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWishListRequest {
    /// List name.
    #[validate(length(max = 255, message = "Name is too long"))]
    pub name: String,
    /// Description.
    #[validate(length(max = 4096, message = "Description is too long"))]
    pub description: String,
}

/// Update wish list request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateWishListRequest {
    /// Wish list id.
    pub id: WishListId,
    /// New name.
    #[validate(length(max = 255, message = "Name is too long"))]
    pub name: String,
    /// New description.
    #[validate(length(max = 4096, message = "Description is too long"))]
    pub description: String,
}

/// Delete wish list request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteWishListRequest {
    /// Wish list id.
    pub id: WishListId,
}

/// Move wish request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoveWishRequest {
    /// The wish to move.
    pub wish_id: WishId,
    /// The list the wish is moved out of.
    pub from_wish_list_id: WishListId,
    /// The list the wish is moved into.
    pub to_wish_list_id: WishListId,
}
