//! # wishlist-database
//!
//! The persistence gateway. [`store`] defines the typed query contract the
//! service layer consumes; [`repositories`] implements it over PostgreSQL
//! and [`memory`] implements it in-process for development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{WishListStore, WishStore};
