//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod credential_strategy;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use credential_strategy::CredentialStrategy;
pub use entity::{AdminUser, SessionRecord, SessionState};
pub use repository::{AdminUserRepository, ConfigProvider, SessionStore};
