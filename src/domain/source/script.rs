use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// A source script read from disk.
///
/// The content digest is computed once at construction and travels with the
/// script so logs can tie an emitted request back to the exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceScript {
    path: PathBuf,
    content: String,
    digest: String,
}

impl SourceScript {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let digest = hex::encode(Sha256::digest(content.as_bytes()));
        Self {
            path: path.into(),
            content,
            digest,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Hex SHA-256 of the content
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
