//! Secrets provider implementations

mod env_provider;
mod factory;
mod file_provider;

pub use env_provider::EnvSecretsProvider;
pub use factory::{SecretsConfig, SecretsProviderFactory};
pub use file_provider::FileSecretsProvider;
