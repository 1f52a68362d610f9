//! Minimum target language version.
//!
//! Stored as a version id (`major * 10000 + minor * 100 + patch`), so `7.1`
//! is `70100`. Type-hint suggestions for scalars, `iterable`, and `object`
//! are gated on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlumbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageVersion(u32);

impl LanguageVersion {
    /// Scalar type declarations (`string`, `int`, `float`, `bool`).
    pub const SCALAR_HINTS: LanguageVersion = LanguageVersion(70000);
    /// The `iterable` pseudo-type.
    pub const ITERABLE_HINT: LanguageVersion = LanguageVersion(70100);
    /// The `object` type.
    pub const OBJECT_HINT: LanguageVersion = LanguageVersion(70200);

    pub const fn from_id(id: u32) -> Self {
        LanguageVersion(id)
    }

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        LanguageVersion(major * 10000 + minor * 100 + patch)
    }

    pub fn id(&self) -> u32 {
        self.0
    }

    pub fn major(&self) -> u32 {
        self.0 / 10000
    }

    pub fn minor(&self) -> u32 {
        (self.0 / 100) % 100
    }

    pub fn patch(&self) -> u32 {
        self.0 % 100
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        LanguageVersion::SCALAR_HINTS
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch() == 0 {
            write!(f, "{}.{}", self.major(), self.minor())
        } else {
            write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
        }
    }
}

impl FromStr for LanguageVersion {
    type Err = PlumbError;

    /// Accepts dotted versions (`7`, `7.4`, `8.1.2`) or a bare id (`70400`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PlumbError::InvalidVersion(s.to_string());

        if !s.contains('.') && s.len() >= 5 {
            return s.parse::<u32>().map(LanguageVersion).map_err(|_| invalid());
        }

        let mut parts = [0u32; 3];
        let mut count = 0;
        for piece in s.split('.') {
            if count == 3 {
                return Err(invalid());
            }
            let n: u32 = piece.parse().map_err(|_| invalid())?;
            if count > 0 && n > 99 {
                return Err(invalid());
            }
            parts[count] = n;
            count += 1;
        }
        Ok(LanguageVersion::new(parts[0], parts[1], parts[2]))
    }
}

impl Serialize for LanguageVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LanguageVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
