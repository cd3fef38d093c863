//! Admin User Entity
//!
//! Read-only view of an `admin_users` row.

use platform::password::StoredPassword;

/// Admin user entity
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Login identifier (stored lower-cased)
    pub email: String,
    /// PBKDF2 hash/salt pair
    pub password: StoredPassword,
    /// Disabled accounts never log in
    pub active: bool,
    /// Informational only; no role-based checks are made
    pub role: String,
}

impl AdminUser {
    pub fn can_login(&self) -> bool {
        self.active
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.can_login() && self.password.verify(password)
    }
}

/// Normalise a login identifier for the email lookup
pub fn normalize_email(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.com "), "a@x.com");
        assert_eq!(normalize_email("ops"), "ops");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_inactive_user_never_verifies() {
        let mut user = AdminUser {
            email: "a@x.com".to_string(),
            password: StoredPassword::derive("Pw!2345"),
            active: true,
            role: "admin".to_string(),
        };
        assert!(user.verify_password("Pw!2345"));

        user.active = false;
        assert!(!user.verify_password("Pw!2345"));
    }
}
