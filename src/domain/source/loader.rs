use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;

use super::SourceScript;
use crate::domain::DomainError;

/// Trait for source script loaders
#[async_trait]
pub trait SourceLoader: Send + Sync + Debug {
    /// Load the script at `path`
    async fn load(&self, path: &Path) -> Result<SourceScript, DomainError>;
}
