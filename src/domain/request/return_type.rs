use std::fmt;

use serde::{Deserialize, Serialize};

/// On-chain type the executed script is expected to return.
///
/// Serialized by its textual name (`"uint256"`, `"int256"`, ...), which is
/// how the platform tooling spells the type in request descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    #[default]
    #[serde(alias = "uint")]
    Uint256,
    #[serde(alias = "int")]
    Int256,
    String,
    Bytes,
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint256 => write!(f, "uint256"),
            Self::Int256 => write!(f, "int256"),
            Self::String => write!(f, "string"),
            Self::Bytes => write!(f, "bytes"),
        }
    }
}
