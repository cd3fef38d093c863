//! Entity Module

pub mod admin_user;
pub mod session_record;

pub use admin_user::{AdminUser, normalize_email};
pub use session_record::{SessionRecord, SessionState};
