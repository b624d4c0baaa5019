//! Wish domain entities.

pub mod model;

pub use model::{CreateWish, Wish};
