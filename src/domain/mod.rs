//! Domain layer - request descriptors, secrets, and source scripts

pub mod error;
pub mod request;
pub mod secrets;
pub mod source;

pub use error::DomainError;
pub use request::{
    CodeLanguage, FunctionsRequest, FunctionsRequestBuilder, Location, RequestProfile,
    RequestValidationError, ReturnType, validate_request, validate_secret_name,
};
pub use secrets::{SecretMapping, SecretsBundle, SecretsProvider};
pub use source::{SourceLoader, SourceScript};
