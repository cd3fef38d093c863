//! Credential Strategy Trait

/// One way of proving admin credentials
#[trait_variant::make(CredentialStrategy: Send)]
pub trait LocalCredentialStrategy {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Whether this strategy accepts the pair. Never errors.
    async fn validate(&self, username: &str, password: &str) -> bool;
}
