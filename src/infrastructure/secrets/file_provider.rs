use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{DomainError, SecretMapping, SecretsBundle, SecretsProvider};

/// Secrets provider backed by a TOML file of `name = "value"` pairs.
///
/// Unlike the env provider, a missing file or missing key is an error: a
/// file reference is explicit configuration, and resolving it to an empty
/// value would hide the misconfiguration.
#[derive(Debug, Clone)]
pub struct FileSecretsProvider {
    path: PathBuf,
}

impl FileSecretsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::secrets(format!(
                "Failed to read secrets file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        toml::from_str(&raw).map_err(|e| {
            DomainError::secrets(format!(
                "Failed to parse secrets file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl SecretsProvider for FileSecretsProvider {
    async fn resolve(&self, mappings: &[SecretMapping]) -> Result<SecretsBundle, DomainError> {
        let entries = self.read_entries().await?;

        let mut bundle = SecretsBundle::new();
        for mapping in mappings {
            let value = entries.get(mapping.reference()).ok_or_else(|| {
                DomainError::secrets(format!(
                    "Secret reference '{}' not found in '{}'",
                    mapping.reference(),
                    self.path.display()
                ))
            })?;

            bundle.insert(mapping.name(), value.clone());
        }

        Ok(bundle)
    }

    fn provider_name(&self) -> &'static str {
        "file"
    }
}
