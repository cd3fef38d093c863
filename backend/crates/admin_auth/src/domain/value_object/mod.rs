//! Value Object Module

pub mod credentials;
pub mod session_id;
pub mod session_token;

pub use credentials::{INSECURE_DEFAULT_SECRET, OperatorCredentials, SessionSecret};
pub use session_id::SessionId;
pub use session_token::{SessionToken, TokenParts};
