use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{EnvSecretsProvider, FileSecretsProvider};
use crate::domain::SecretsProvider;

/// Secrets provider selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum SecretsConfig {
    Env,
    File { path: PathBuf },
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self::Env
    }
}

/// Factory for creating secrets providers
#[derive(Debug)]
pub struct SecretsProviderFactory;

impl SecretsProviderFactory {
    /// Create a secrets provider from configuration
    pub fn create(config: &SecretsConfig) -> Arc<dyn SecretsProvider> {
        match config {
            SecretsConfig::Env => Arc::new(EnvSecretsProvider::new()),
            SecretsConfig::File { path } => Arc::new(FileSecretsProvider::new(path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_env_provider() {
        let provider = SecretsProviderFactory::create(&SecretsConfig::Env);
        assert_eq!(provider.provider_name(), "env");
    }

    #[test]
    fn test_factory_creates_file_provider() {
        let config = SecretsConfig::File {
            path: PathBuf::from("secrets.toml"),
        };
        let provider = SecretsProviderFactory::create(&config);
        assert_eq!(provider.provider_name(), "file");
    }

    #[test]
    fn test_config_deserializes_from_toml() {
        let config: SecretsConfig = toml::from_str("provider = \"env\"").unwrap();
        assert_eq!(config, SecretsConfig::Env);

        let config: SecretsConfig =
            toml::from_str("provider = \"file\"\npath = \"secrets.toml\"").unwrap();
        assert_eq!(
            config,
            SecretsConfig::File {
                path: PathBuf::from("secrets.toml")
            }
        );
    }
}
