//! # wishlist-entity
//!
//! Domain entity models for the wishlist service. Every struct in this
//! crate represents a database table row or the data needed to write one.
//! Database entities derive `sqlx::FromRow`.

pub mod user;
pub mod wish;
pub mod wish_list;
