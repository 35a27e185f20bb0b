use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Language of the inlined source script.
///
/// The platform currently executes JavaScript only; the enum exists because
/// the wire format reserves a numeric slot for the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeLanguage {
    #[default]
    JavaScript,
}

impl CodeLanguage {
    /// Numeric code used by the platform wire format
    pub fn code(self) -> u8 {
        match self {
            Self::JavaScript => 0,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
        }
    }
}

impl Serialize for CodeLanguage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CodeLanguage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CodeLanguageVisitor;

        impl de::Visitor<'_> for CodeLanguageVisitor {
            type Value = CodeLanguage;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a code language code or name")
            }

            fn visit_u64<E>(self, value: u64) -> Result<CodeLanguage, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .ok()
                    .and_then(CodeLanguage::from_code)
                    .ok_or_else(|| E::custom(format!("unknown code language code: {value}")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<CodeLanguage, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("unknown code language code: {value}")))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<CodeLanguage, E>
            where
                E: de::Error,
            {
                match value {
                    "javascript" => Ok(CodeLanguage::JavaScript),
                    other => Err(E::custom(format!("unknown code language: '{other}'"))),
                }
            }
        }

        deserializer.deserialize_any(CodeLanguageVisitor)
    }
}
