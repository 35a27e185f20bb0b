use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{DomainError, RequestProfile, ReturnType};
use crate::infrastructure::secrets::SecretsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub secrets: SecretsConfig,
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, RequestProfile>,
    #[serde(default = "default_profile_name")]
    pub default_profile: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            secrets: SecretsConfig::default(),
            profiles: default_profiles(),
            default_profile: default_profile_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

fn default_profile_name() -> String {
    "alpaca-mint".to_string()
}

/// The stock profile: Alpaca account balance checked before a mint, uint256
/// on-chain result, broker credentials from the conventional env vars
fn default_profiles() -> BTreeMap<String, RequestProfile> {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        default_profile_name(),
        RequestProfile::new("./functions/sources/alpacaBalance.js")
            .with_secret("alpacaKey", "ALPACA_API_KEY")
            .with_secret("alpacaSecret", "ALPACA_API_SECRET")
            .with_expected_return_type(ReturnType::Uint256),
    );
    profiles
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("FNREQ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn profile(&self, name: &str) -> Option<&RequestProfile> {
        self.profiles.get(name)
    }

    /// Look up `name`, or the default profile when `name` is `None`
    pub fn resolve_profile<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Result<(&'a str, &'a RequestProfile), DomainError> {
        let name = name.unwrap_or(&self.default_profile);
        let profile = self.profiles.get(name).ok_or_else(|| {
            DomainError::configuration(format!("Request profile '{name}' not configured"))
        })?;

        Ok((name, profile))
    }
}
