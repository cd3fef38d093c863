//! Unit tests for admin_auth crate
//! Shared fakes live in `support`; scenario tests exercise the layers together.

#[cfg(test)]
pub(crate) mod support {
    use parking_lot::RwLock;
    use platform::password::StoredPassword;

    use crate::domain::entity::{AdminUser, normalize_email};
    use crate::domain::repository::{AdminUserRepository, ConfigProvider};
    use crate::domain::value_object::{OperatorCredentials, SessionSecret};
    use crate::error::{AdminAuthError, AuthResult};

    /// Mutable in-process configuration
    #[derive(Default)]
    pub struct StaticConfig {
        secret: RwLock<Option<String>>,
        operator: RwLock<Option<(String, String)>>,
        acs_secret: RwLock<Option<String>>,
    }

    impl StaticConfig {
        pub fn with_secret(secret: &str) -> Self {
            let config = Self::default();
            config.set_secret(secret);
            config
        }

        pub fn with_acs_secret(self, secret: &str) -> Self {
            *self.acs_secret.write() = Some(secret.to_string());
            self
        }

        pub fn set_secret(&self, secret: &str) {
            *self.secret.write() = Some(secret.to_string());
        }

        pub fn set_operator(&self, username: &str, password: &str) {
            *self.operator.write() = Some((username.to_string(), password.to_string()));
        }
    }

    impl ConfigProvider for StaticConfig {
        fn operator_credentials(&self) -> Option<OperatorCredentials> {
            let operator = self.operator.read();
            let (username, password) = operator.as_ref()?;
            OperatorCredentials::new(username.clone(), password.clone())
        }

        fn session_secret(&self) -> SessionSecret {
            match self.secret.read().as_ref() {
                Some(secret) => SessionSecret::new(secret.clone()),
                None => SessionSecret::insecure_default(),
            }
        }

        fn acs_check_secret(&self) -> Option<String> {
            self.acs_secret.read().clone()
        }
    }

    /// `admin_users` table in a Vec
    #[derive(Default)]
    pub struct MemoryAdminUsers {
        users: Vec<AdminUser>,
    }

    impl MemoryAdminUsers {
        pub fn with_user(mut self, email: &str, password: &str, active: bool) -> Self {
            self.users.push(AdminUser {
                email: normalize_email(email),
                password: StoredPassword::derive(password),
                active,
                role: "admin".to_string(),
            });
            self
        }
    }

    impl AdminUserRepository for MemoryAdminUsers {
        async fn find_active_by_email(&self, email: &str) -> AuthResult<Option<AdminUser>> {
            Ok(self
                .users
                .iter()
                .find(|user| user.active && user.email == email)
                .cloned())
        }
    }

    /// A database that is always down
    pub struct FailingAdminUsers;

    impl AdminUserRepository for FailingAdminUsers {
        async fn find_active_by_email(&self, _email: &str) -> AuthResult<Option<AdminUser>> {
            Err(AdminAuthError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}

#[cfg(test)]
mod credential_tests {
    use std::sync::Arc;

    use super::support::{FailingAdminUsers, MemoryAdminUsers, StaticConfig};
    use crate::application::CredentialValidator;

    fn operator_config() -> Arc<StaticConfig> {
        let config = StaticConfig::with_secret("k");
        config.set_operator("ops", "secret123");
        Arc::new(config)
    }

    #[tokio::test]
    async fn test_operator_login_with_database_down() {
        let validator = CredentialValidator::new(operator_config(), Arc::new(FailingAdminUsers));
        assert!(validator.validate_admin_credentials("ops", "secret123").await);
    }

    #[tokio::test]
    async fn test_wrong_operator_password_falls_through() {
        let validator = CredentialValidator::new(operator_config(), Arc::new(FailingAdminUsers));
        assert!(!validator.validate_admin_credentials("ops", "wrong").await);

        // Falls through to the database, which knows nobody either
        let validator =
            CredentialValidator::new(operator_config(), Arc::new(MemoryAdminUsers::default()));
        assert!(!validator.validate_admin_credentials("ops", "wrong").await);
    }

    #[tokio::test]
    async fn test_database_user_login() {
        let repo = MemoryAdminUsers::default()
            .with_user("a@x.com", "Pw!2345", true)
            .with_user("b@x.com", "Pw!2345", false);
        let validator = CredentialValidator::new(Arc::new(StaticConfig::default()), Arc::new(repo));

        assert!(validator.validate_admin_credentials("a@x.com", "Pw!2345").await);
        assert!(validator.validate_admin_credentials(" A@X.COM", "Pw!2345").await);
        assert!(!validator.validate_admin_credentials("a@x.com", "wrong").await);
        assert!(!validator.validate_admin_credentials("b@x.com", "Pw!2345").await);
        assert!(!validator.validate_admin_credentials("", "").await);
    }

    #[tokio::test]
    async fn test_operator_and_database_coexist() {
        let repo = MemoryAdminUsers::default().with_user("a@x.com", "Pw!2345", true);
        let validator = CredentialValidator::new(operator_config(), Arc::new(repo));

        assert!(validator.validate_admin_credentials("ops", "secret123").await);
        assert!(validator.validate_admin_credentials("a@x.com", "Pw!2345").await);
        assert!(!validator.validate_admin_credentials("a@x.com", "secret123").await);
    }
}

#[cfg(test)]
mod session_tests {
    use std::sync::Arc;

    use super::support::StaticConfig;
    use crate::application::{AdminAuthConfig, AdminSessions};
    use crate::domain::repository::SessionStore;
    use crate::error::TokenRejection;
    use crate::infra::InMemorySessionStore;

    const NOW: i64 = 1_700_000_000_000;
    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[test]
    fn test_default_threshold_purges_on_create() {
        let store = Arc::new(InMemorySessionStore::new());
        let sessions = AdminSessions::new(
            store.clone(),
            Arc::new(StaticConfig::with_secret("k")),
            Arc::new(AdminAuthConfig::default()),
        );

        for _ in 0..100 {
            sessions.create_at(false, NOW - 13 * HOUR_MS).unwrap();
        }
        assert_eq!(store.len(), 100);

        let fresh = sessions.create_at(false, NOW).unwrap();
        assert_eq!(store.len(), 1);
        assert!(sessions.validate_at(&fresh.token, NOW));
    }

    #[test]
    fn test_live_sessions_survive_cleanup() {
        let store = Arc::new(InMemorySessionStore::new());
        let sessions = AdminSessions::new(
            store.clone(),
            Arc::new(StaticConfig::with_secret("k")),
            Arc::new(AdminAuthConfig::default()),
        );

        let live: Vec<_> = (0..101)
            .map(|_| sessions.create_at(true, NOW).unwrap())
            .collect();
        assert_eq!(store.len(), 101);
        assert!(live.iter().all(|s| sessions.validate_at(&s.token, NOW)));
    }

    #[test]
    fn test_rotated_secret_invalidates_tokens() {
        let config = Arc::new(StaticConfig::with_secret("first"));
        let sessions = AdminSessions::new(
            Arc::new(InMemorySessionStore::new()),
            config.clone(),
            Arc::new(AdminAuthConfig::default()),
        );
        let issued = sessions.create_at(false, NOW).unwrap();

        config.set_secret("second");
        assert_eq!(
            sessions.verify_at(&issued.token, NOW),
            Err(TokenRejection::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        let sessions = AdminSessions::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(StaticConfig::with_secret("k")),
            Arc::new(AdminAuthConfig::default()),
        );

        for token in ["", "abc", "a:b", "a:b:c:d", "a::c", ":1:c"] {
            assert_eq!(
                sessions.verify_at(token, NOW),
                Err(TokenRejection::InvalidFormat),
                "token {token:?}"
            );
        }
        assert_eq!(
            sessions.verify_at("abc:soon:deadbeef", NOW),
            Err(TokenRejection::ExpiredToken)
        );
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::response::Response;
    use axum::routing::get;
    use tower::ServiceExt;

    use super::support::{MemoryAdminUsers, StaticConfig};
    use crate::application::AdminAuthConfig;
    use crate::infra::InMemorySessionStore;
    use crate::presentation::{AdminAuthAppState, admin_auth_router, require_admin_session};

    fn app() -> Router {
        let config = StaticConfig::with_secret("http-secret");
        config.set_operator("ops", "secret123");
        let repo = MemoryAdminUsers::default().with_user("a@x.com", "Pw!2345", true);

        let state = AdminAuthAppState::new(
            Arc::new(repo),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(config),
            AdminAuthConfig::default(),
        );

        let panel = Router::new()
            .route("/panel", get(|| async { "panel" }))
            .route_layer(from_fn_with_state(
                state.sessions.clone(),
                require_admin_session::<InMemorySessionStore, StaticConfig>,
            ));

        Router::new().nest("/admin", panel.merge(admin_auth_router(state)))
    }

    fn login_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/admin/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn header_str<'a>(response: &'a Response, name: header::HeaderName) -> &'a str {
        response.headers()[name].to_str().unwrap()
    }

    /// `name=value` half of a Set-Cookie header
    fn cookie_pair(response: &Response) -> String {
        header_str(response, header::SET_COOKIE)
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_redirects() {
        let app = app();
        let response = app
            .clone()
            .oneshot(login_request("username=ops&password=secret123&remember_me=on"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(header_str(&response, header::LOCATION), "/admin");
        let set_cookie = header_str(&response, header::SET_COOKIE);
        assert!(set_cookie.starts_with("admin_session="));
        assert!(set_cookie.contains("Max-Age=2592000"));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(!set_cookie.contains("Secure"));

        let cookie = cookie_pair(&response);
        let response = app
            .clone()
            .oneshot(get_with_cookie("/admin/panel", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_trims_padded_username() {
        let response = app()
            .oneshot(login_request("username=+ops+&password=secret123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(header_str(&response, header::LOCATION), "/admin");
        assert!(header_str(&response, header::SET_COOKIE).starts_with("admin_session="));
    }

    #[tokio::test]
    async fn test_database_login_over_forwarded_https() {
        let request = Request::builder()
            .method("POST")
            .uri("/admin/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-forwarded-proto", "https")
            .body(Body::from("username=A%40x.com&password=Pw%212345"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        let set_cookie = header_str(&response, header::SET_COOKIE);
        assert!(set_cookie.contains("Max-Age=43200"));
        assert!(set_cookie.contains("; Secure"));
    }

    #[tokio::test]
    async fn test_failed_login_redirects_with_error() {
        let response = app()
            .oneshot(login_request("username=ops&password=wrong"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            header_str(&response, header::LOCATION),
            "/admin/login?error=invalid_credentials"
        );
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_guard_redirects_anonymous() {
        let response = app()
            .oneshot(get_with_cookie("/admin/panel", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(header_str(&response, header::LOCATION), "/admin/login");

        let response = app()
            .oneshot(get_with_cookie("/admin/panel", Some("admin_session=forged")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_login_page_redirects_when_signed_in() {
        let app = app();
        let response = app
            .clone()
            .oneshot(get_with_cookie("/admin/login", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let login = app
            .clone()
            .oneshot(login_request("username=ops&password=secret123"))
            .await
            .unwrap();
        let cookie = cookie_pair(&login);

        let response = app
            .oneshot(get_with_cookie("/admin/login", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(header_str(&response, header::LOCATION), "/admin");
    }

    #[tokio::test]
    async fn test_logout_revokes_session() {
        let app = app();
        let login = app
            .clone()
            .oneshot(login_request("username=ops&password=secret123"))
            .await
            .unwrap();
        let cookie = cookie_pair(&login);

        let status = app
            .clone()
            .oneshot(get_with_cookie("/admin/session", Some(&cookie)))
            .await
            .unwrap();
        let body = json_body(status).await;
        assert_eq!(body["authenticated"], true);
        assert!(body["expiresAtMs"].is_i64());

        let logout = Request::builder()
            .method("POST")
            .uri("/admin/logout")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(logout).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(header_str(&response, header::LOCATION), "/admin/login");
        assert!(header_str(&response, header::SET_COOKIE).contains("Max-Age=0"));

        let status = app
            .oneshot(get_with_cookie("/admin/session", Some(&cookie)))
            .await
            .unwrap();
        let body = json_body(status).await;
        assert_eq!(body["authenticated"], false);
        assert_eq!(body["reason"], "SESSION_NOT_ACTIVE");
    }

    #[tokio::test]
    async fn test_session_status_without_cookie() {
        let response = app()
            .oneshot(get_with_cookie("/admin/session", None))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "authenticated": false })
        );
    }
}
