//! # wishlist-service
//!
//! Business logic for the wishlist service. Every operation takes an
//! explicit [`RequestContext`] naming the caller; every operation that
//! touches an existing list goes through the [`OwnershipGuard`] first.
//!
//! Services follow constructor injection: store implementations are
//! provided at construction time as `Arc<dyn ...>` trait objects.

pub mod context;
pub mod wish_list;

pub use context::RequestContext;
pub use wish_list::{
    CreateWishListRequest, MoveWishRequest, OwnershipGuard, UpdateWishListRequest,
    WishListService,
};
