//! Admin Session Middleware
//!
//! Route guards for the admin panel.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::AdminSessions;
use crate::domain::repository::{ConfigProvider, SessionStore};
use crate::presentation::handlers::redirect;

/// Middleware that requires a valid admin session
///
/// Unauthenticated requests are redirected to the login page.
pub async fn require_admin_session<S, C>(
    State(sessions): State<Arc<AdminSessions<S, C>>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    if sessions.require_auth(req.headers()).requires_auth {
        tracing::debug!(path = %req.uri().path(), "Admin route requires login");
        return redirect(&sessions.config().login_path);
    }

    next.run(req).await
}
