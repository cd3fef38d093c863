//! Session Record Entity
//!
//! The server-side half of an admin session. Its presence in the
//! [`SessionStore`](crate::domain::repository::SessionStore) is what makes a
//! signed token revocable.

/// Lifecycle state of a session id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No record
    Absent,
    /// Record present and `now < expires_at`
    Active,
    /// Record present, `now >= expires_at`, not purged yet
    Expired,
}

/// In-memory session record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord {
    /// Created timestamp (Unix ms)
    pub created_at_ms: i64,
    /// Session expiration (Unix ms)
    pub expires_at_ms: i64,
}

impl SessionRecord {
    /// Create a record starting at `now_ms` and living `ttl_ms`
    pub fn new(now_ms: i64, ttl_ms: i64) -> Self {
        Self {
            created_at_ms: now_ms,
            expires_at_ms: now_ms.saturating_add(ttl_ms),
        }
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn state_at(&self, now_ms: i64) -> SessionState {
        if self.is_expired_at(now_ms) {
            SessionState::Expired
        } else {
            SessionState::Active
        }
    }
}
