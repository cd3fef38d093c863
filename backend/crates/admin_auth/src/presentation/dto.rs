//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::error::TokenRejection;

// ============================================================================
// Login
// ============================================================================

/// Login form (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// HTML checkbox: `"on"` when ticked, absent otherwise
    #[serde(default)]
    pub remember_me: Option<String>,
}

impl LoginForm {
    /// Submitted username without surrounding whitespace
    pub fn username(&self) -> &str {
        self.username.trim()
    }

    pub fn remember_me(&self) -> bool {
        matches!(self.remember_me.as_deref(), Some("on" | "true" | "1"))
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<TokenRejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at_ms: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_me_checkbox() {
        let mut form = LoginForm::default();
        assert!(!form.remember_me());

        form.remember_me = Some("on".to_string());
        assert!(form.remember_me());

        form.remember_me = Some("off".to_string());
        assert!(!form.remember_me());
    }

    #[test]
    fn test_username_is_trimmed() {
        let form = LoginForm {
            username: "  ops\t".to_string(),
            ..Default::default()
        };
        assert_eq!(form.username(), "ops");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(SessionStatusResponse {
            authenticated: false,
            reason: Some(TokenRejection::ExpiredToken),
            expires_at_ms: None,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "authenticated": false, "reason": "EXPIRED_TOKEN" })
        );
    }
}
