//! Admin Session Lifecycle
//!
//! Creates, verifies and destroys admin sessions. A token is valid iff its
//! signature matches, it has not expired, and its id is still in the store.
//!
//! States per session id: Absent → Active → Expired → Absent. Expiry is only
//! observed on read; purging happens on `destroy` or when `create` finds the
//! store above its cleanup threshold.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use platform::cookie::extract_cookie_decoded;
use platform::crypto::constant_time_eq;

use crate::application::config::AdminAuthConfig;
use crate::application::token_signer::TokenSigner;
use crate::domain::entity::{SessionRecord, SessionState};
use crate::domain::repository::{ConfigProvider, SessionStore};
use crate::domain::value_object::{SessionId, TokenParts};
use crate::error::{AuthResult, TokenRejection};

/// Header carrying the internal-tooling capability secret
pub const ACS_CHECK_HEADER: &str = "x-acs-check";

/// A newly created session
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Token to hand to the client (before cookie encoding)
    pub token: String,
    pub session_id: SessionId,
    pub expires_at_ms: i64,
}

/// A token that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub session_id: SessionId,
    pub expires_at_ms: i64,
}

/// Route-guard verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRequirement {
    pub requires_auth: bool,
}

/// Session lifecycle over a [`SessionStore`]
pub struct AdminSessions<S, C>
where
    S: SessionStore,
    C: ConfigProvider,
{
    store: Arc<S>,
    config_provider: Arc<C>,
    config: Arc<AdminAuthConfig>,
    signer: TokenSigner<C>,
}

impl<S, C> AdminSessions<S, C>
where
    S: SessionStore,
    C: ConfigProvider,
{
    pub fn new(store: Arc<S>, config_provider: Arc<C>, config: Arc<AdminAuthConfig>) -> Self {
        Self {
            store,
            signer: TokenSigner::new(config_provider.clone()),
            config_provider,
            config,
        }
    }

    pub fn config(&self) -> &AdminAuthConfig {
        &self.config
    }

    // ========================================================================
    // Create
    // ========================================================================

    /// Create a session (12h, or 30d with "Remember Me")
    pub fn create(&self, remember_me: bool) -> AuthResult<IssuedSession> {
        self.create_at(remember_me, now_ms())
    }

    pub fn create_at(&self, remember_me: bool, now_ms: i64) -> AuthResult<IssuedSession> {
        let record = SessionRecord::new(now_ms, self.config.session_ttl_ms(remember_me));
        let token = self
            .signer
            .sign(SessionId::generate(), record.expires_at_ms)?;

        self.store.put(token.session_id.clone(), record);
        self.maybe_cleanup(now_ms);

        tracing::info!(
            session = token.session_id.short(),
            remember_me,
            expires_at_ms = record.expires_at_ms,
            "Admin session created"
        );

        Ok(IssuedSession {
            token: token.encode(),
            session_id: token.session_id,
            expires_at_ms: record.expires_at_ms,
        })
    }

    fn maybe_cleanup(&self, now_ms: i64) {
        if self.store.len() <= self.config.cleanup_threshold {
            return;
        }
        let removed = self.store.cleanup_expired(now_ms);
        if removed > 0 {
            tracing::debug!(removed, "Purged expired admin sessions");
        }
    }

    // ========================================================================
    // Verify / validate
    // ========================================================================

    /// Full verification: format, expiry, signature, then store membership
    pub fn verify(&self, token: &str) -> Result<VerifiedSession, TokenRejection> {
        self.verify_at(token, now_ms())
    }

    pub fn verify_at(&self, token: &str, now_ms: i64) -> Result<VerifiedSession, TokenRejection> {
        let token = self.signer.check(token, now_ms)?;

        if !self.store.has(&token.session_id) {
            return Err(TokenRejection::SessionNotActive);
        }

        Ok(VerifiedSession {
            session_id: token.session_id,
            expires_at_ms: token.expires_at_ms,
        })
    }

    /// Boolean gate; `true` only for an Active session
    pub fn validate(&self, token: &str) -> bool {
        self.validate_at(token, now_ms())
    }

    pub fn validate_at(&self, token: &str, now_ms: i64) -> bool {
        match self.verify_at(token, now_ms) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(reason = reason.code(), "Admin session rejected");
                false
            }
        }
    }

    /// Current lifecycle state of a session id
    pub fn state_at(&self, session_id: &SessionId, now_ms: i64) -> SessionState {
        self.store
            .get(session_id)
            .map(|record| record.state_at(now_ms))
            .unwrap_or(SessionState::Absent)
    }

    // ========================================================================
    // Destroy
    // ========================================================================

    /// Remove the session named by a well-formed token, expired or not
    ///
    /// Returns whether a record was removed.
    pub fn destroy(&self, token: &str) -> bool {
        let Ok(parts) = TokenParts::split(token) else {
            return false;
        };

        let session_id = SessionId::from_token_part(parts.id);
        let removed = self.store.delete(&session_id);
        if removed {
            tracing::info!(session = session_id.short(), "Admin session destroyed");
        }
        removed
    }

    // ========================================================================
    // Request-level checks
    // ========================================================================

    /// Whether the request carries a valid admin session cookie
    ///
    /// Internal tooling may instead present `X-ACS-Check: <secret>`, honoured
    /// only when `ADMIN_ACS_CHECK_SECRET` is configured.
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        if self.acs_check_granted(headers) {
            return true;
        }

        match extract_cookie_decoded(headers, &self.config.session_cookie_name) {
            Some(token) => self.validate(&token),
            None => false,
        }
    }

    /// Route-guard convenience wrapper
    pub fn require_auth(&self, headers: &HeaderMap) -> AuthRequirement {
        AuthRequirement {
            requires_auth: !self.is_authenticated(headers),
        }
    }

    fn acs_check_granted(&self, headers: &HeaderMap) -> bool {
        let Some(presented) = headers.get(ACS_CHECK_HEADER) else {
            return false;
        };

        let expected = match self.config_provider.acs_check_secret() {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("X-ACS-Check header ignored: no capability secret configured");
                return false;
            }
        };

        if constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
            tracing::warn!("Admin session check bypassed via X-ACS-Check capability");
            true
        } else {
            tracing::warn!("X-ACS-Check header rejected: secret mismatch");
            false
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
