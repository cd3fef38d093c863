//! Process-environment configuration
//!
//! Variables are read on every call, never cached, so values set after
//! startup (tests, late secret injection) are honoured.

use crate::domain::repository::ConfigProvider;
use crate::domain::value_object::{OperatorCredentials, SessionSecret};

pub const ADMIN_USER_VAR: &str = "ADMIN_USER";
pub const ADMIN_PASS_VAR: &str = "ADMIN_PASS";
pub const ADMIN_SESSION_SECRET_VAR: &str = "ADMIN_SESSION_SECRET";
pub const ADMIN_ACS_CHECK_SECRET_VAR: &str = "ADMIN_ACS_CHECK_SECRET";

/// [`ConfigProvider`] over `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl ConfigProvider for EnvConfigProvider {
    fn operator_credentials(&self) -> Option<OperatorCredentials> {
        OperatorCredentials::new(read_var(ADMIN_USER_VAR)?, read_var(ADMIN_PASS_VAR)?)
    }

    fn session_secret(&self) -> SessionSecret {
        match read_var(ADMIN_SESSION_SECRET_VAR) {
            Some(secret) => SessionSecret::new(secret),
            None => SessionSecret::insecure_default(),
        }
    }

    fn acs_check_secret(&self) -> Option<String> {
        read_var(ADMIN_ACS_CHECK_SECRET_VAR)
    }
}
