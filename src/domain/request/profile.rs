use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CodeLanguage, Location, ReturnType};
use crate::domain::secrets::SecretMapping;

/// A named recipe for assembling one request: where the source script lives,
/// which environment the secrets come from, and the descriptor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestProfile {
    /// Path of the source script on disk
    pub source_path: PathBuf,
    /// Secret name -> provider reference (environment variable, file key)
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub expected_return_type: ReturnType,
    #[serde(default)]
    pub code_location: Location,
    #[serde(default = "default_secrets_location")]
    pub secrets_location: Location,
    #[serde(default)]
    pub code_language: CodeLanguage,
}

fn default_secrets_location() -> Location {
    Location::DonHosted
}

impl RequestProfile {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            secrets: BTreeMap::new(),
            args: Vec::new(),
            expected_return_type: ReturnType::Uint256,
            code_location: Location::Inline,
            secrets_location: Location::DonHosted,
            code_language: CodeLanguage::JavaScript,
        }
    }

    pub fn with_secret(mut self, name: impl Into<String>, reference: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), reference.into());
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_expected_return_type(mut self, return_type: ReturnType) -> Self {
        self.expected_return_type = return_type;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Secret mappings in stable (name) order
    pub fn secret_mappings(&self) -> Vec<SecretMapping> {
        self.secrets
            .iter()
            .map(|(name, reference)| SecretMapping::new(name, reference))
            .collect()
    }
}
