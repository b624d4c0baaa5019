//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishlist_core::types::UserId;

/// A person who can own wish lists.
///
/// Identity is established by an external provider; this row only anchors
/// the `creator_id` foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (optional, unique when present).
    pub email: Option<String>,
    /// When the user was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
}
