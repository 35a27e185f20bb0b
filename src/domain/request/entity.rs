use serde::{Deserialize, Serialize};

use super::{CodeLanguage, Location, RequestValidationError, ReturnType, validation};
use crate::domain::secrets::SecretsBundle;

/// Request descriptor submitted to the execution platform.
///
/// Field names and enum encodings follow the platform wire format: camelCase
/// keys, numeric location/language codes, textual return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionsRequest {
    /// Source script, inlined as a string
    pub source: String,
    pub code_location: Location,
    pub secrets: SecretsBundle,
    pub secrets_location: Location,
    pub args: Vec<String>,
    pub code_language: CodeLanguage,
    pub expected_return_type: ReturnType,
}

impl FunctionsRequest {
    /// Create a request with the platform defaults: inline code, DON-hosted
    /// secrets, no args, JavaScript source, uint256 return
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            code_location: Location::Inline,
            secrets: SecretsBundle::new(),
            secrets_location: Location::DonHosted,
            args: Vec::new(),
            code_language: CodeLanguage::JavaScript,
            expected_return_type: ReturnType::Uint256,
        }
    }

    pub fn builder() -> FunctionsRequestBuilder {
        FunctionsRequestBuilder::new()
    }

    pub fn validate(&self) -> Result<(), RequestValidationError> {
        validation::validate_request(self)
    }
}

/// Builder for FunctionsRequest
#[derive(Debug)]
pub struct FunctionsRequestBuilder {
    source: String,
    code_location: Location,
    secrets: SecretsBundle,
    secrets_location: Location,
    args: Vec<String>,
    code_language: CodeLanguage,
    expected_return_type: ReturnType,
}

impl FunctionsRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn code_location(mut self, location: Location) -> Self {
        self.code_location = location;
        self
    }

    pub fn secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name, value);
        self
    }

    pub fn secrets(mut self, secrets: SecretsBundle) -> Self {
        self.secrets = secrets;
        self
    }

    pub fn secrets_location(mut self, location: Location) -> Self {
        self.secrets_location = location;
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn code_language(mut self, language: CodeLanguage) -> Self {
        self.code_language = language;
        self
    }

    pub fn expected_return_type(mut self, return_type: ReturnType) -> Self {
        self.expected_return_type = return_type;
        self
    }

    pub fn build(self) -> FunctionsRequest {
        FunctionsRequest {
            source: self.source,
            code_location: self.code_location,
            secrets: self.secrets,
            secrets_location: self.secrets_location,
            args: self.args,
            code_language: self.code_language,
            expected_return_type: self.expected_return_type,
        }
    }
}

impl Default for FunctionsRequestBuilder {
    fn default() -> Self {
        Self {
            source: String::new(),
            code_location: Location::Inline,
            secrets: SecretsBundle::new(),
            secrets_location: Location::DonHosted,
            args: Vec::new(),
            code_language: CodeLanguage::JavaScript,
            expected_return_type: ReturnType::Uint256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_platform_defaults() {
        let request = FunctionsRequest::new("return Functions.encodeUint256(1)");

        assert_eq!(request.code_location, Location::Inline);
        assert_eq!(request.secrets_location, Location::DonHosted);
        assert!(request.secrets.is_empty());
        assert!(request.args.is_empty());
        assert_eq!(request.code_language, CodeLanguage::JavaScript);
        assert_eq!(request.expected_return_type, ReturnType::Uint256);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let request = FunctionsRequest::builder()
            .source("return Functions.encodeString(args[0])")
            .secret("apiKey", "k")
            .arg("hello")
            .expected_return_type(ReturnType::String)
            .build();

        assert_eq!(request.secrets.get("apiKey"), Some("k"));
        assert_eq!(request.args, vec!["hello".to_string()]);
        assert_eq!(request.expected_return_type, ReturnType::String);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_wire_serialization() {
        let request = FunctionsRequest::builder()
            .source("const x = 1")
            .secret("alpacaKey", "")
            .secret("alpacaSecret", "")
            .build();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source"], "const x = 1");
        assert_eq!(json["codeLocation"], 0);
        assert_eq!(json["secretsLocation"], 2);
        assert_eq!(json["codeLanguage"], 0);
        assert_eq!(json["expectedReturnType"], "uint256");
        assert_eq!(json["args"], serde_json::json!([]));
        assert_eq!(
            json["secrets"],
            serde_json::json!({ "alpacaKey": "", "alpacaSecret": "" })
        );
    }

    #[test]
    fn test_wire_round_trip() {
        let wire = r#"{
            "source": "const balance = await fetchBalance()",
            "codeLocation": 0,
            "secrets": { "alpacaKey": "k", "alpacaSecret": "s" },
            "secretsLocation": 2,
            "args": ["AAPL"],
            "codeLanguage": 0,
            "expectedReturnType": "uint256"
        }"#;

        let request: FunctionsRequest = serde_json::from_str(wire).unwrap();
        assert_eq!(request.code_location, Location::Inline);
        assert_eq!(request.secrets_location, Location::DonHosted);
        assert_eq!(request.secrets.get("alpacaKey"), Some("k"));
        assert_eq!(request.args, vec!["AAPL".to_string()]);

        let back = serde_json::to_string(&request).unwrap();
        let reparsed: FunctionsRequest = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, request);
    }
}
