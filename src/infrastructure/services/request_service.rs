use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, FunctionsRequest, RequestProfile, SecretsProvider, SourceLoader,
};

/// Assembles request descriptors from profiles: loads the source script,
/// resolves the profile's secrets through the configured provider, and
/// validates the result.
#[derive(Debug)]
pub struct RequestService {
    source_loader: Arc<dyn SourceLoader>,
    secrets_provider: Arc<dyn SecretsProvider>,
}

impl RequestService {
    pub fn new(
        source_loader: Arc<dyn SourceLoader>,
        secrets_provider: Arc<dyn SecretsProvider>,
    ) -> Self {
        Self {
            source_loader,
            secrets_provider,
        }
    }

    pub async fn assemble(&self, profile: &RequestProfile) -> Result<FunctionsRequest, DomainError> {
        let script = self.source_loader.load(profile.source_path()).await?;

        let mappings = profile.secret_mappings();
        let secrets = self.secrets_provider.resolve(&mappings).await?;

        info!(
            provider = self.secrets_provider.provider_name(),
            secrets = secrets.len(),
            source_digest = script.digest(),
            "Request inputs resolved"
        );

        let request = FunctionsRequest::builder()
            .source(script.into_content())
            .code_location(profile.code_location)
            .secrets(secrets)
            .secrets_location(profile.secrets_location)
            .args(profile.args.clone())
            .code_language(profile.code_language)
            .expected_return_type(profile.expected_return_type)
            .build();

        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        Ok(request)
    }
}
