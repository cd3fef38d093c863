//! Operator credentials and the session signing secret
//!
//! Both come from process configuration and are re-read on every use.

use std::fmt;

use platform::crypto::constant_time_eq;

/// Placeholder used when `ADMIN_SESSION_SECRET` is unset. Development only.
pub const INSECURE_DEFAULT_SECRET: &str = "insecure-dev-admin-session-secret-change-me";

/// Static bootstrap login (`ADMIN_USER` / `ADMIN_PASS`)
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorCredentials {
    username: String,
    password: String,
}

impl OperatorCredentials {
    /// Returns `None` unless both values are non-empty
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Evaluate both so a wrong username costs the same as a wrong password
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl fmt::Debug for OperatorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// HMAC key for session tokens
#[derive(Clone)]
pub struct SessionSecret {
    value: String,
    insecure_default: bool,
}

impl SessionSecret {
    /// A configured secret; empty input falls back to the placeholder
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            return Self::insecure_default();
        }
        Self {
            value,
            insecure_default: false,
        }
    }

    /// The development placeholder
    pub fn insecure_default() -> Self {
        Self {
            value: INSECURE_DEFAULT_SECRET.to_string(),
            insecure_default: true,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// True when running on the placeholder
    pub fn is_insecure_default(&self) -> bool {
        self.insecure_default
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSecret")
            .field("value", &"[REDACTED]")
            .field("insecure_default", &self.insecure_default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_credentials_require_both_fields() {
        assert!(OperatorCredentials::new("ops", "").is_none());
        assert!(OperatorCredentials::new("", "secret123").is_none());
        assert!(OperatorCredentials::new("ops", "secret123").is_some());
    }

    #[test]
    fn test_operator_credentials_exact_match() {
        let creds = OperatorCredentials::new("ops", "secret123").unwrap();
        assert!(creds.matches("ops", "secret123"));
        assert!(!creds.matches("ops", "wrong"));
        assert!(!creds.matches("OPS", "secret123"));
        assert!(!creds.matches(" ops", "secret123"));
        assert!(!creds.matches("ops", "secret1234"));
    }

    #[test]
    fn test_session_secret_fallback() {
        let secret = SessionSecret::new("");
        assert!(secret.is_insecure_default());
        assert_eq!(secret.as_bytes(), INSECURE_DEFAULT_SECRET.as_bytes());

        let secret = SessionSecret::new("s3cr3t");
        assert!(!secret.is_insecure_default());
        assert_eq!(secret.as_bytes(), b"s3cr3t");
    }

    #[test]
    fn test_debug_redaction() {
        let creds = OperatorCredentials::new("ops", "secret123").unwrap();
        assert!(!format!("{:?}", creds).contains("secret123"));
        assert!(!format!("{:?}", SessionSecret::new("s3cr3t")).contains("s3cr3t"));
    }
}
