//! Application Layer
//!
//! Credential validation, token signing and the session lifecycle.

pub mod config;
pub mod credential_validator;
pub mod session_lifecycle;
pub mod token_signer;

// Re-exports
pub use config::AdminAuthConfig;
pub use credential_validator::{
    CredentialValidator, DatabaseCredentialStrategy, DefaultStrategies, FirstMatch,
    OperatorCredentialStrategy,
};
pub use session_lifecycle::{AdminSessions, AuthRequirement, IssuedSession, VerifiedSession};
pub use token_signer::TokenSigner;
