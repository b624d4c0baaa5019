//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use wishlist_core::config::AuthConfig;
use wishlist_core::error::AppError;
use wishlist_core::types::{SessionId, UserId};

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Value written to the `iss` claim.
    issuer: String,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .finish()
    }
}

/// A freshly minted access token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Encoded bearer token.
    pub access_token: String,
    /// The session the token represents.
    pub session_id: SessionId,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            access_ttl_minutes: i64::try_from(config.jwt_access_ttl_minutes).unwrap_or(i64::MAX),
        }
    }

    /// Mints an access token for `user_id` under a new session.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        self.issue_for_session(user_id, SessionId::new())
    }

    /// Mints an access token for `user_id` under an existing session.
    pub fn issue_for_session(
        &self,
        user_id: UserId,
        session_id: SessionId,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = chrono::TimeDelta::try_minutes(self.access_ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::configuration("Access token TTL overflows"))?;

        let claims = Claims {
            sub: user_id,
            sid: session_id,
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            session_id,
            expires_at,
        })
    }
}
