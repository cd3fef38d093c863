//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AdminAuthAppState;
pub use middleware::require_admin_session;
pub use router::{PgAdminAuthState, admin_auth_router, admin_auth_state};
