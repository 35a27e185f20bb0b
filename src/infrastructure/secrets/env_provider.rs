use std::env;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{DomainError, SecretMapping, SecretsBundle, SecretsProvider};

/// Secrets provider that reads from environment variables.
///
/// A missing or non-unicode variable resolves to the empty string: the
/// platform treats absent secrets as empty values, and a request assembled
/// on a host without credentials must still be inspectable. The gap is
/// logged so it does not pass silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretsProvider;

impl EnvSecretsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretsProvider for EnvSecretsProvider {
    async fn resolve(&self, mappings: &[SecretMapping]) -> Result<SecretsBundle, DomainError> {
        let mut bundle = SecretsBundle::new();

        for mapping in mappings {
            let value = match env::var(mapping.reference()) {
                Ok(value) => value,
                Err(env::VarError::NotPresent) => {
                    warn!(
                        secret = mapping.name(),
                        var = mapping.reference(),
                        "Environment variable not set, secret resolves empty"
                    );
                    String::new()
                }
                Err(env::VarError::NotUnicode(_)) => {
                    warn!(
                        secret = mapping.name(),
                        var = mapping.reference(),
                        "Environment variable is not valid unicode, secret resolves empty"
                    );
                    String::new()
                }
            };

            bundle.insert(mapping.name(), value);
        }

        Ok(bundle)
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_set_variable() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("FNREQ_TEST_ALPACA_KEY", "pk-test-123") };

        let provider = EnvSecretsProvider::new();
        let mappings = vec![SecretMapping::new("alpacaKey", "FNREQ_TEST_ALPACA_KEY")];

        let bundle = provider.resolve(&mappings).await.unwrap();
        assert_eq!(bundle.get("alpacaKey"), Some("pk-test-123"));

        // SAFETY: Test cleanup
        unsafe { env::remove_var("FNREQ_TEST_ALPACA_KEY") };
    }

    #[tokio::test]
    async fn test_missing_variable_resolves_empty() {
        let provider = EnvSecretsProvider::new();
        let mappings = vec![
            SecretMapping::new("alpacaKey", "FNREQ_TEST_NONEXISTENT_12345"),
            SecretMapping::new("alpacaSecret", "FNREQ_TEST_NONEXISTENT_67890"),
        ];

        let bundle = provider.resolve(&mappings).await.unwrap();
        assert_eq!(bundle.get("alpacaKey"), Some(""));
        assert_eq!(bundle.get("alpacaSecret"), Some(""));
        assert_eq!(bundle.empty_names().len(), 2);
    }

    #[tokio::test]
    async fn test_no_mappings_resolve_to_empty_bundle() {
        let provider = EnvSecretsProvider::new();

        let bundle = provider.resolve(&[]).await.unwrap();
        assert!(bundle.is_empty());
    }
}
