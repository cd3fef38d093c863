//! Application Configuration
//!
//! Static knobs of the admin session layer. Secrets and operator credentials
//! are not here; they come from a [`ConfigProvider`](crate::domain::ConfigProvider)
//! at call time.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Admin auth application configuration
#[derive(Debug, Clone)]
pub struct AdminAuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session TTL without "Remember Me" (12 hours)
    pub session_ttl_short: Duration,
    /// Session TTL with "Remember Me" (30 days)
    pub session_ttl_long: Duration,
    /// Registry size above which `create` purges expired records
    pub cleanup_threshold: usize,
    /// Always set `Secure`, regardless of how the request arrived
    pub force_secure_cookie: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Where unauthenticated callers are sent
    pub login_path: String,
    /// Where a successful login lands
    pub landing_path: String,
}

impl Default for AdminAuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "admin_session".to_string(),
            session_ttl_short: Duration::from_secs(12 * 3600), // 12 hours
            session_ttl_long: Duration::from_secs(30 * 24 * 3600), // 30 days
            cleanup_threshold: 100,
            force_secure_cookie: false,
            cookie_same_site: SameSite::Lax,
            login_path: "/admin/login".to_string(),
            landing_path: "/admin".to_string(),
        }
    }
}

impl AdminAuthConfig {
    /// Config for deployments that are always served over TLS
    pub fn behind_tls() -> Self {
        Self {
            force_secure_cookie: true,
            ..Default::default()
        }
    }

    /// Session TTL for the given "Remember Me" choice
    pub fn session_ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        }
    }

    /// Session TTL in milliseconds
    pub fn session_ttl_ms(&self, remember_me: bool) -> i64 {
        self.session_ttl(remember_me).as_millis() as i64
    }

    /// Cookie settings for a freshly issued session
    pub fn session_cookie(&self, remember_me: bool, secure_request: bool) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.force_secure_cookie || secure_request,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl(remember_me).as_secs()),
        }
    }

    /// Cookie settings used to clear the session cookie
    pub fn clear_cookie(&self, secure_request: bool) -> CookieConfig {
        CookieConfig {
            max_age_secs: None,
            ..self.session_cookie(false, secure_request)
        }
    }
}
