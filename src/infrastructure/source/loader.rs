use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{DomainError, SourceLoader, SourceScript};

/// Loads source scripts from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSourceLoader;

impl FileSourceLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SourceLoader for FileSourceLoader {
    async fn load(&self, path: &Path) -> Result<SourceScript, DomainError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::source(format!(
                "Failed to read source script '{}': {}",
                path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Err(DomainError::source(format!(
                "Source script '{}' is empty",
                path.display()
            )));
        }

        let script = SourceScript::new(path, content);
        debug!(
            path = %script.path().display(),
            digest = script.digest(),
            bytes = script.content().len(),
            "Source script loaded"
        );

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_loads_script_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"const balance = await fetchBalance()").unwrap();
        file.flush().unwrap();

        let loader = FileSourceLoader::new();
        let script = loader.load(file.path()).await.unwrap();

        assert_eq!(script.content(), "const balance = await fetchBalance()");
        assert_eq!(script.path(), file.path());
        assert_eq!(script.digest().len(), 64);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let loader = FileSourceLoader::new();

        let result = loader.load(Path::new("/nonexistent/alpacaBalance.js")).await;
        assert!(matches!(result, Err(DomainError::Source { .. })));
    }

    #[tokio::test]
    async fn test_empty_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"  \n\t\n").unwrap();
        file.flush().unwrap();

        let loader = FileSourceLoader::new();

        let result = loader.load(file.path()).await;
        assert!(matches!(result, Err(DomainError::Source { .. })));
    }
}
