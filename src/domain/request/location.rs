use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Where a request artifact (code or secrets) lives, as understood by the
/// execution platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    /// The artifact is carried inline in the request descriptor
    #[default]
    Inline,
    /// The artifact is fetched from a remote URL at execution time
    Remote,
    /// The artifact is hosted on the oracle network itself
    DonHosted,
}

impl Location {
    /// Numeric code used by the platform wire format
    pub fn code(self) -> u8 {
        match self {
            Self::Inline => 0,
            Self::Remote => 1,
            Self::DonHosted => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Inline),
            1 => Some(Self::Remote),
            2 => Some(Self::DonHosted),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::Remote => write!(f, "remote"),
            Self::DonHosted => write!(f, "don_hosted"),
        }
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LocationVisitor;

        impl de::Visitor<'_> for LocationVisitor {
            type Value = Location;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a location code (0-2) or location name")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Location, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .ok()
                    .and_then(Location::from_code)
                    .ok_or_else(|| E::custom(format!("unknown location code: {value}")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Location, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("unknown location code: {value}")))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Location, E>
            where
                E: de::Error,
            {
                match value {
                    "inline" => Ok(Location::Inline),
                    "remote" => Ok(Location::Remote),
                    "don_hosted" | "donHosted" => Ok(Location::DonHosted),
                    other => Err(E::custom(format!("unknown location name: '{other}'"))),
                }
            }
        }

        deserializer.deserialize_any(LocationVisitor)
    }
}
