//! Credential Validator
//!
//! Ordered credential strategies; the first one to accept wins.
//!
//! 1. Operator credentials from configuration. Works with the database down.
//! 2. Active `admin_users` row with a matching PBKDF2 password.
//!
//! Every failure, including infrastructure errors, is a rejection.

use std::sync::Arc;

use crate::domain::credential_strategy::CredentialStrategy;
use crate::domain::entity::normalize_email;
use crate::domain::repository::{AdminUserRepository, ConfigProvider};

// ============================================================================
// Operator credentials
// ============================================================================

/// Static `ADMIN_USER` / `ADMIN_PASS` pair
pub struct OperatorCredentialStrategy<C>
where
    C: ConfigProvider,
{
    config_provider: Arc<C>,
}

impl<C> OperatorCredentialStrategy<C>
where
    C: ConfigProvider,
{
    pub fn new(config_provider: Arc<C>) -> Self {
        Self { config_provider }
    }
}

impl<C> CredentialStrategy for OperatorCredentialStrategy<C>
where
    C: ConfigProvider,
{
    fn name(&self) -> &'static str {
        "operator"
    }

    async fn validate(&self, username: &str, password: &str) -> bool {
        match self.config_provider.operator_credentials() {
            Some(credentials) => credentials.matches(username, password),
            None => false,
        }
    }
}

// ============================================================================
// Database credentials
// ============================================================================

/// Per-user credentials from `admin_users`
pub struct DatabaseCredentialStrategy<R>
where
    R: AdminUserRepository + Send + Sync,
{
    repo: Arc<R>,
}

impl<R> DatabaseCredentialStrategy<R>
where
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> CredentialStrategy for DatabaseCredentialStrategy<R>
where
    R: AdminUserRepository + Send + Sync,
{
    fn name(&self) -> &'static str {
        "database"
    }

    async fn validate(&self, username: &str, password: &str) -> bool {
        let email = normalize_email(username);
        if email.is_empty() {
            return false;
        }

        let user = match self.repo.find_active_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return false,
            Err(e) => {
                e.log();
                tracing::warn!(code = e.code(), "Admin user lookup failed; rejecting login");
                return false;
            }
        };

        if !user.can_login() {
            return false;
        }

        // PBKDF2 with 100k rounds is CPU-bound; keep it off the async workers
        let password = password.to_owned();
        match tokio::task::spawn_blocking(move || user.verify_password(&password)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Try `first`, then `then`; short-circuits on the first acceptance
pub struct FirstMatch<A, B> {
    first: A,
    then: B,
}

impl<A, B> FirstMatch<A, B> {
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }

    /// Append another strategy with the lowest priority
    pub fn or<N>(self, next: N) -> FirstMatch<Self, N> {
        FirstMatch::new(self, next)
    }
}

impl<A, B> CredentialStrategy for FirstMatch<A, B>
where
    A: CredentialStrategy + Sync,
    B: CredentialStrategy + Sync,
{
    fn name(&self) -> &'static str {
        "first-match"
    }

    async fn validate(&self, username: &str, password: &str) -> bool {
        if self.first.validate(username, password).await {
            tracing::debug!(strategy = self.first.name(), "Admin credentials accepted");
            return true;
        }
        if self.then.validate(username, password).await {
            tracing::debug!(strategy = self.then.name(), "Admin credentials accepted");
            return true;
        }
        false
    }
}

/// Default strategy chain: operator first, then database
pub type DefaultStrategies<C, R> =
    FirstMatch<OperatorCredentialStrategy<C>, DatabaseCredentialStrategy<R>>;

/// Entry point for login handlers
pub struct CredentialValidator<S>
where
    S: CredentialStrategy + Sync,
{
    strategies: S,
}

impl<C, R> CredentialValidator<DefaultStrategies<C, R>>
where
    C: ConfigProvider,
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(config_provider: Arc<C>, repo: Arc<R>) -> Self {
        Self::with_strategies(FirstMatch::new(
            OperatorCredentialStrategy::new(config_provider),
            DatabaseCredentialStrategy::new(repo),
        ))
    }
}

impl<S> CredentialValidator<S>
where
    S: CredentialStrategy + Sync,
{
    pub fn with_strategies(strategies: S) -> Self {
        Self { strategies }
    }

    /// `true` iff some strategy accepts; never errors, never panics
    pub async fn validate_admin_credentials(&self, username: &str, password: &str) -> bool {
        let accepted = self.strategies.validate(username, password).await;
        if !accepted {
            tracing::warn!("Admin credentials rejected");
        }
        accepted
    }
}
