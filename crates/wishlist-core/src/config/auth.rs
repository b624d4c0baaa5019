//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Settings for the bearer tokens that carry the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Expected `iss` claim; tokens from other issuers are rejected.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Allowed clock skew in seconds when checking expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            issuer: default_issuer(),
            leeway_seconds: default_leeway(),
        }
    }
}

/// Shipped default secret. Only the memory provider may run with it.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_issuer() -> String {
    "wishlist".to_string()
}

fn default_leeway() -> u64 {
    5
}
