//! Repository Traits
//!
//! Interfaces for data access and configuration. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{AdminUser, SessionRecord};
use crate::domain::value_object::{OperatorCredentials, SessionId, SessionSecret};
use crate::error::AuthResult;

/// Admin user lookup (the `admin_users` table)
#[trait_variant::make(AdminUserRepository: Send)]
pub trait LocalAdminUserRepository {
    /// Find an active admin by normalised (trimmed, lower-cased) email
    ///
    /// A missing row is `Ok(None)`, not an error.
    async fn find_active_by_email(&self, email: &str) -> AuthResult<Option<AdminUser>>;
}

/// Registry of live session ids
///
/// Membership is checked independently of token signature and expiry;
/// deleting an id revokes every token carrying it.
pub trait SessionStore: Send + Sync {
    /// Insert or overwrite
    fn put(&self, id: SessionId, record: SessionRecord);

    fn has(&self, id: &SessionId) -> bool;

    fn get(&self, id: &SessionId) -> Option<SessionRecord>;

    /// Remove; returns whether a record was present
    fn delete(&self, id: &SessionId) -> bool;

    /// Drop every record whose expiry is before `now_ms`
    fn cleanup_expired(&self, now_ms: i64) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Configuration read at call time, so late changes are picked up
pub trait ConfigProvider: Send + Sync {
    /// Static operator login, if both halves are configured
    fn operator_credentials(&self) -> Option<OperatorCredentials>;

    /// Token signing secret (placeholder when unset)
    fn session_secret(&self) -> SessionSecret;

    /// Shared secret the `X-ACS-Check` header must carry to bypass sessions
    fn acs_check_secret(&self) -> Option<String>;
}
