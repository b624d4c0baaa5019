//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wishlist_core::types::{SessionId, UserId};

/// Context for the current authenticated request.
///
/// Built by the transport once the session token checks out and passed
/// into every service method, so that each operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: UserId,
    /// The session the call arrived on.
    pub session_id: SessionId,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: UserId,
        session_id: SessionId,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            session_id,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// A context for in-process callers (CLI, tests) with no network origin.
    pub fn for_user(user_id: UserId) -> Self {
        Self::new(user_id, SessionId::new(), "local".to_string(), None)
    }
}
