//! Wish list operations and the ownership guard they share.

pub mod ownership;
pub mod service;

pub use ownership::OwnershipGuard;
pub use service::{
    CreateWishListRequest, MoveWishRequest, UpdateWishListRequest, WishListService,
};
