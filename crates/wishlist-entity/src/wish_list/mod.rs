//! Wish list domain entities.

pub mod model;

pub use model::{CreateWishList, UpdateWishList, WishList};
