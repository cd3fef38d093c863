//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `admin_auth::AdminAuthError`.

use admin_auth::infra::env::{ADMIN_SESSION_SECRET_VAR, ADMIN_USER_VAR};
use admin_auth::middleware::require_admin_session;
use admin_auth::{
    AdminAuthConfig, EnvConfigProvider, InMemorySessionStore, PgAdminUserRepository,
    admin_auth_router, admin_auth_state,
};
use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
    middleware::from_fn_with_state,
    routing::get,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,admin_auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !env::var(ADMIN_SESSION_SECRET_VAR).is_ok_and(|v| !v.is_empty()) {
        tracing::warn!("{ADMIN_SESSION_SECRET_VAR} is not set; admin sessions use an insecure key");
    }
    if env::var(ADMIN_USER_VAR).is_err() {
        tracing::info!("No operator login configured; only admin_users accounts can sign in");
    }

    // Database connection. Connected lazily so operator login keeps
    // working while the database is unreachable.
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&database_url)?;

    // Admin auth wiring
    let config = if env::var("ADMIN_COOKIE_SECURE").is_ok_and(|v| v == "true") {
        AdminAuthConfig::behind_tls()
    } else {
        AdminAuthConfig::default()
    };
    let state = admin_auth_state(PgAdminUserRepository::new(pool), config);

    let admin = Router::new()
        .route("/", get(admin_landing))
        .route_layer(from_fn_with_state(
            state.sessions.clone(),
            require_admin_session::<InMemorySessionStore, EnvConfigProvider>,
        ))
        .merge(admin_auth_router(state));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/admin", admin)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be host:port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET /admin (behind the session guard)
async fn admin_landing() -> &'static str {
    "admin"
}
