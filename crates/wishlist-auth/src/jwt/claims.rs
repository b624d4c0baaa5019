//! JWT claims carried by every session token.

use serde::{Deserialize, Serialize};

use wishlist_core::types::{SessionId, UserId};

/// Claims payload embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: UserId,
    /// Session this token belongs to.
    pub sid: SessionId,
    /// Issuer.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user id from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// Returns the session id.
    pub fn session_id(&self) -> SessionId {
        self.sid
    }
}
