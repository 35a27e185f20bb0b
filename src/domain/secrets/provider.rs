use std::fmt::Debug;

use async_trait::async_trait;

use super::{SecretMapping, SecretsBundle};
use crate::domain::DomainError;

/// Trait for secrets providers (environment, secrets file, ...)
#[async_trait]
pub trait SecretsProvider: Send + Sync + Debug {
    /// Resolve a set of secret mappings into a bundle
    async fn resolve(&self, mappings: &[SecretMapping]) -> Result<SecretsBundle, DomainError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
