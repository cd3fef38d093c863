//! Token Signer
//!
//! Signs and checks the cryptographic half of a session token. Store
//! membership is the caller's job (see `AdminSessions::verify`).
//!
//! Checks run in a fixed order and stop at the first failure:
//! format → expiry → signature.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use platform::crypto::{constant_time_eq, hmac_sha256_hex};

use crate::domain::repository::ConfigProvider;
use crate::domain::value_object::{SessionId, SessionSecret, SessionToken, TokenParts};
use crate::error::{AdminAuthError, AuthResult, TokenRejection};

/// HMAC-SHA256 token signer keyed by the configured session secret
pub struct TokenSigner<C>
where
    C: ConfigProvider,
{
    config_provider: Arc<C>,
    warned_insecure_secret: AtomicBool,
}

impl<C> TokenSigner<C>
where
    C: ConfigProvider,
{
    pub fn new(config_provider: Arc<C>) -> Self {
        Self {
            config_provider,
            warned_insecure_secret: AtomicBool::new(false),
        }
    }

    /// Sign `id:expires_at_ms`
    pub fn sign(&self, session_id: SessionId, expires_at_ms: i64) -> AuthResult<SessionToken> {
        let secret = self.secret();
        let payload = SessionToken::signing_payload(&session_id, expires_at_ms);
        let signature = hmac_sha256_hex(secret.as_bytes(), payload.as_bytes())
            .map_err(|e| AdminAuthError::Internal(format!("HMAC key rejected: {e}")))?;

        Ok(SessionToken {
            session_id,
            expires_at_ms,
            signature,
        })
    }

    /// Check format, expiry and signature of `raw` as of `now_ms`
    pub fn check(&self, raw: &str, now_ms: i64) -> Result<SessionToken, TokenRejection> {
        let parts = TokenParts::split(raw)?;

        let expires_at_ms = parts.expires_at_ms()?;
        if now_ms >= expires_at_ms {
            return Err(TokenRejection::ExpiredToken);
        }

        let secret = self.secret();
        let expected = hmac_sha256_hex(secret.as_bytes(), parts.signing_payload().as_bytes())
            .map_err(|_| TokenRejection::ValidationError)?;

        if !constant_time_eq(expected.as_bytes(), parts.signature.as_bytes()) {
            return Err(TokenRejection::InvalidSignature);
        }

        Ok(SessionToken {
            session_id: SessionId::from_token_part(parts.id),
            expires_at_ms,
            signature: parts.signature.to_string(),
        })
    }

    fn secret(&self) -> SessionSecret {
        let secret = self.config_provider.session_secret();
        if secret.is_insecure_default() && !self.warned_insecure_secret.swap(true, Ordering::Relaxed)
        {
            tracing::warn!(
                "ADMIN_SESSION_SECRET is not set; signing admin sessions with the insecure \
                 development placeholder"
            );
        }
        secret
    }
}
