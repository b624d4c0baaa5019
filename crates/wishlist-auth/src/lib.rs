//! # wishlist-auth
//!
//! Session tokens for the wishlist service. The identity provider is
//! external; this crate only mints and validates the HS256 bearer tokens
//! whose subject is the calling user's id.
//!
//! ## Modules
//!
//! - `jwt`: claims plus token creation and validation

pub mod jwt;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
