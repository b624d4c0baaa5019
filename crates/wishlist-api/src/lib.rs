//! # wishlist-api
//!
//! HTTP API layer for the wishlist service built on Axum.
//!
//! Procedures are exposed RPC-style under `/api`: queries are `GET` with
//! their input in the query string, mutations are `POST` with a JSON body.
//! Every wish list procedure requires a bearer token.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
