//! Admin Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AdminAuthConfig;
use crate::domain::repository::{AdminUserRepository, ConfigProvider, SessionStore};
use crate::infra::{EnvConfigProvider, InMemorySessionStore, PgAdminUserRepository};
use crate::presentation::handlers::{self, AdminAuthAppState};

/// Production wiring: Postgres users, in-memory sessions, env configuration
pub type PgAdminAuthState =
    AdminAuthAppState<PgAdminUserRepository, InMemorySessionStore, EnvConfigProvider>;

/// Build the production state
pub fn admin_auth_state(repo: PgAdminUserRepository, config: AdminAuthConfig) -> PgAdminAuthState {
    AdminAuthAppState::new(
        Arc::new(repo),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(EnvConfigProvider::new()),
        config,
    )
}

/// Login, logout and status routes; nest under `/admin`
pub fn admin_auth_router<R, S, C>(state: AdminAuthAppState<R, S, C>) -> Router
where
    R: AdminUserRepository + Send + Sync + 'static,
    S: SessionStore + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route(
            "/login",
            get(handlers::login_page::<R, S, C>).post(handlers::login::<R, S, C>),
        )
        .route("/logout", post(handlers::logout::<R, S, C>))
        .route("/session", get(handlers::session_status::<R, S, C>))
        .with_state(state)
}
