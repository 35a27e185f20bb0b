//! Functions Request Config
//!
//! Loads, validates, and serializes request configurations for DON-based
//! function execution:
//! - Request profiles declared in layered configuration files
//! - Source scripts inlined from disk, with a content digest for traceability
//! - Secrets resolved from the environment or a secrets file
//! - Platform wire encoding (camelCase JSON, numeric location codes)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use crate::domain::FunctionsRequest;

use std::sync::Arc;

use crate::infrastructure::secrets::SecretsProviderFactory;
use crate::infrastructure::services::RequestService;
use crate::infrastructure::source::FileSourceLoader;
use tracing::debug;

/// Assemble a request for the named profile (or the configured default)
pub async fn assemble_request(
    config: &AppConfig,
    profile: Option<&str>,
) -> anyhow::Result<FunctionsRequest> {
    let (name, profile) = config.resolve_profile(profile)?;

    let service = RequestService::new(
        Arc::new(FileSourceLoader::new()),
        SecretsProviderFactory::create(&config.secrets),
    );

    let request = service.assemble(profile).await?;
    debug!(profile = name, "Request assembled");

    Ok(request)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::{Location, RequestProfile, ReturnType};

    #[tokio::test]
    async fn test_assemble_request_end_to_end() {
        let mut source = tempfile::NamedTempFile::new().unwrap();
        source
            .write_all(b"const balance = await fetchBalance()")
            .unwrap();
        source.flush().unwrap();

        let mut config = AppConfig::default();
        config.profiles.insert(
            "balance".to_string(),
            RequestProfile::new(source.path())
                .with_secret("alpacaKey", "FNREQ_LIB_TEST_UNSET_KEY")
                .with_expected_return_type(ReturnType::Uint256),
        );

        let request = assemble_request(&config, Some("balance")).await.unwrap();

        assert_eq!(request.source, "const balance = await fetchBalance()");
        assert_eq!(request.code_location, Location::Inline);
        assert_eq!(request.secrets_location, Location::DonHosted);
        // unset env var resolves to an empty secret value
        assert_eq!(request.secrets.get("alpacaKey"), Some(""));
    }

    #[tokio::test]
    async fn test_assemble_request_unknown_profile() {
        let config = AppConfig::default();

        let result = assemble_request(&config, Some("missing")).await;
        assert!(result.is_err());
    }
}
