//! Admin Auth Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and strategy traits
//! - `application/` - Credential validation, token signing, session lifecycle
//! - `infra/` - Postgres, in-memory and environment implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Operator login from `ADMIN_USER` / `ADMIN_PASS`, usable without a database
//! - Per-user login against `admin_users` (PBKDF2-SHA512)
//! - Stateless HMAC-signed session tokens backed by a revocable in-memory registry
//! - "Remember Me" sessions (30 days instead of 12 hours)
//!
//! ## Token Format
//! `<session_id>:<expires_at_ms>:<hex(hmac_sha256(secret, "<session_id>:<expires_at_ms>"))>`
//!
//! A token is accepted iff it is well formed, unexpired, correctly signed, and
//! its session id is still registered.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdminAuthConfig;
pub use application::{AdminSessions, CredentialValidator};
pub use error::{AdminAuthError, AuthResult, TokenRejection};
pub use infra::{EnvConfigProvider, InMemorySessionStore, PgAdminUserRepository};
pub use presentation::router::{admin_auth_router, admin_auth_state};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
