//! Request validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FunctionsRequest, Location};

/// Maximum length for secret names
pub const MAX_SECRET_NAME_LENGTH: usize = 64;

/// Secret names become properties on the object the platform exposes to the
/// executing script, so they must be valid identifiers
static SECRET_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Request validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum RequestValidationError {
    /// Source script is empty or whitespace-only
    EmptySource,
    /// Code is inlined in the descriptor, so the code location must be inline
    InlineCodeRequired { location: Location },
    /// Secret name is empty
    EmptySecretName,
    /// Secret name exceeds maximum length
    SecretNameTooLong { name: String, length: usize, max: usize },
    /// Secret name is not a valid identifier
    InvalidSecretName { name: String },
    /// Secrets present but the secrets location is inline; the platform does
    /// not accept plaintext inline secrets
    PlaintextSecrets,
    /// Positional argument is empty
    EmptyArg { index: usize },
}

impl fmt::Display for RequestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "source script cannot be empty"),
            Self::InlineCodeRequired { location } => {
                write!(
                    f,
                    "source is inlined in the descriptor; code location must be inline, got '{}'",
                    location
                )
            }
            Self::EmptySecretName => write!(f, "secret name cannot be empty"),
            Self::SecretNameTooLong { name, length, max } => {
                write!(
                    f,
                    "secret name '{}' too long: {} characters (max {})",
                    name, length, max
                )
            }
            Self::InvalidSecretName { name } => {
                write!(
                    f,
                    "invalid secret name '{}': must be an identifier (letters, digits, underscores, not starting with a digit)",
                    name
                )
            }
            Self::PlaintextSecrets => {
                write!(
                    f,
                    "secrets location must be hosted (don_hosted or remote) when secrets are present"
                )
            }
            Self::EmptyArg { index } => write!(f, "argument {} is empty", index),
        }
    }
}

impl std::error::Error for RequestValidationError {}

/// Validate a secret name
pub fn validate_secret_name(name: &str) -> Result<(), RequestValidationError> {
    if name.is_empty() {
        return Err(RequestValidationError::EmptySecretName);
    }

    if name.len() > MAX_SECRET_NAME_LENGTH {
        return Err(RequestValidationError::SecretNameTooLong {
            name: name.to_string(),
            length: name.len(),
            max: MAX_SECRET_NAME_LENGTH,
        });
    }

    if !SECRET_NAME_PATTERN.is_match(name) {
        return Err(RequestValidationError::InvalidSecretName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validate an assembled request
pub fn validate_request(request: &FunctionsRequest) -> Result<(), RequestValidationError> {
    if request.source.trim().is_empty() {
        return Err(RequestValidationError::EmptySource);
    }

    if request.code_location != Location::Inline {
        return Err(RequestValidationError::InlineCodeRequired {
            location: request.code_location,
        });
    }

    for name in request.secrets.names() {
        validate_secret_name(name)?;
    }

    if !request.secrets.is_empty() && request.secrets_location == Location::Inline {
        return Err(RequestValidationError::PlaintextSecrets);
    }

    for (index, arg) in request.args.iter().enumerate() {
        if arg.is_empty() {
            return Err(RequestValidationError::EmptyArg { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::ReturnType;

    #[test]
    fn test_valid_secret_names() {
        assert!(validate_secret_name("alpacaKey").is_ok());
        assert!(validate_secret_name("alpaca_secret").is_ok());
        assert!(validate_secret_name("_private").is_ok());
        assert!(validate_secret_name("KEY2").is_ok());
        assert!(validate_secret_name("a").is_ok());
    }

    #[test]
    fn test_invalid_secret_names() {
        assert!(matches!(
            validate_secret_name(""),
            Err(RequestValidationError::EmptySecretName)
        ));

        let long_name = "a".repeat(65);
        assert!(matches!(
            validate_secret_name(&long_name),
            Err(RequestValidationError::SecretNameTooLong { .. })
        ));

        assert!(matches!(
            validate_secret_name("2key"),
            Err(RequestValidationError::InvalidSecretName { .. })
        ));
        assert!(matches!(
            validate_secret_name("alpaca-key"),
            Err(RequestValidationError::InvalidSecretName { .. })
        ));
        assert!(matches!(
            validate_secret_name("alpaca key"),
            Err(RequestValidationError::InvalidSecretName { .. })
        ));
    }

    #[test]
    fn test_max_length_secret_name() {
        let max_name = "a".repeat(MAX_SECRET_NAME_LENGTH);
        assert!(validate_secret_name(&max_name).is_ok());
    }

    #[test]
    fn test_empty_source_rejected() {
        let request = FunctionsRequest::new("   \n  ");
        assert!(matches!(
            validate_request(&request),
            Err(RequestValidationError::EmptySource)
        ));
    }

    #[test]
    fn test_remote_code_location_rejected() {
        let request = FunctionsRequest::builder()
            .source("return 1")
            .code_location(Location::Remote)
            .build();

        assert!(matches!(
            validate_request(&request),
            Err(RequestValidationError::InlineCodeRequired { .. })
        ));
    }

    #[test]
    fn test_plaintext_secrets_rejected() {
        let request = FunctionsRequest::builder()
            .source("return 1")
            .secret("apiKey", "k")
            .secrets_location(Location::Inline)
            .build();

        assert!(matches!(
            validate_request(&request),
            Err(RequestValidationError::PlaintextSecrets)
        ));
    }

    #[test]
    fn test_empty_secrets_allow_any_secrets_location() {
        let request = FunctionsRequest::builder()
            .source("return 1")
            .secrets_location(Location::Inline)
            .build();

        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_empty_arg_rejected() {
        let request = FunctionsRequest::builder()
            .source("return 1")
            .arg("AAPL")
            .arg("")
            .build();

        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::EmptyArg { index: 1 })
        );
    }

    #[test]
    fn test_complete_request_passes() {
        let request = FunctionsRequest::builder()
            .source("const balance = await fetchBalance()")
            .secret("alpacaKey", "")
            .secret("alpacaSecret", "")
            .expected_return_type(ReturnType::Uint256)
            .build();

        assert!(validate_request(&request).is_ok());
    }
}
