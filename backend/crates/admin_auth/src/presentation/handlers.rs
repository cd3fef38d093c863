//! HTTP Handlers

use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use platform::cookie::{extract_cookie_decoded, is_secure_request};

use crate::application::config::AdminAuthConfig;
use crate::application::{AdminSessions, CredentialValidator, DefaultStrategies};
use crate::domain::repository::{AdminUserRepository, ConfigProvider, SessionStore};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, SessionStatusResponse};

/// Query value appended to the login path after a rejected attempt
pub const INVALID_CREDENTIALS: &str = "invalid_credentials";

/// Shared state for admin auth handlers
pub struct AdminAuthAppState<R, S, C>
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    pub validator: Arc<CredentialValidator<DefaultStrategies<C, R>>>,
    pub sessions: Arc<AdminSessions<S, C>>,
}

impl<R, S, C> AdminAuthAppState<R, S, C>
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    pub fn new(repo: Arc<R>, store: Arc<S>, config_provider: Arc<C>, config: AdminAuthConfig) -> Self {
        Self {
            validator: Arc::new(CredentialValidator::new(config_provider.clone(), repo)),
            sessions: Arc::new(AdminSessions::new(store, config_provider, Arc::new(config))),
        }
    }

    fn config(&self) -> &AdminAuthConfig {
        self.sessions.config()
    }
}

// Manual impl: a derive would demand `R: Clone` and friends
impl<R, S, C> Clone for AdminAuthAppState<R, S, C>
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /admin/login
///
/// Already signed in: straight to the landing page. Otherwise 204 and the
/// static login page is served by the frontend.
pub async fn login_page<R, S, C>(
    State(state): State<AdminAuthAppState<R, S, C>>,
    headers: HeaderMap,
) -> Response
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    if state.sessions.is_authenticated(&headers) {
        return redirect(&state.config().landing_path);
    }
    StatusCode::NO_CONTENT.into_response()
}

/// POST /admin/login
pub async fn login<R, S, C>(
    State(state): State<AdminAuthAppState<R, S, C>>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    let accepted = state
        .validator
        .validate_admin_credentials(form.username(), &form.password)
        .await;

    if !accepted {
        let location = format!("{}?error={}", state.config().login_path, INVALID_CREDENTIALS);
        return Ok(redirect(&location));
    }

    let remember_me = form.remember_me();
    let issued = state.sessions.create(remember_me)?;

    let cookie = state
        .config()
        .session_cookie(remember_me, is_secure_request(&headers, &uri))
        .build_set_cookie(&issued.token);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, state.config().landing_path.clone()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response())
}

// ============================================================================
// Logout
// ============================================================================

/// POST /admin/logout
pub async fn logout<R, S, C>(
    State(state): State<AdminAuthAppState<R, S, C>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    if let Some(token) = extract_cookie_decoded(&headers, &state.config().session_cookie_name) {
        state.sessions.destroy(&token);
    }

    let cookie = state
        .config()
        .clear_cookie(is_secure_request(&headers, &uri))
        .build_delete_cookie();

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, state.config().login_path.clone()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /admin/session
pub async fn session_status<R, S, C>(
    State(state): State<AdminAuthAppState<R, S, C>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    let Some(token) = extract_cookie_decoded(&headers, &state.config().session_cookie_name) else {
        return Json(SessionStatusResponse {
            authenticated: false,
            reason: None,
            expires_at_ms: None,
        });
    };

    match state.sessions.verify(&token) {
        Ok(session) => Json(SessionStatusResponse {
            authenticated: true,
            reason: None,
            expires_at_ms: Some(session.expires_at_ms),
        }),
        Err(reason) => Json(SessionStatusResponse {
            authenticated: false,
            reason: Some(reason),
            expires_at_ms: None,
        }),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// 302 Found, as browsers expect after a form post
pub(crate) fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
