//! Permissive field decoding for records exported by the PGR backend.
//!
//! The backend owns its own enumerations and may add values this crate does
//! not know yet. Record fields are therefore decoded as [`Lenient`]: a known
//! value parses into the typed enum, anything else is kept verbatim so it can
//! be reported at the records boundary instead of failing the whole load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A string-encoded enum value that may not be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lenient<T> {
    Known(T),
    Unrecognized(String),
}

impl<T> Lenient<T> {
    /// Returns the typed value when it was recognised.
    pub fn known(&self) -> Option<&T> {
        match self {
            Lenient::Known(value) => Some(value),
            Lenient::Unrecognized(_) => None,
        }
    }

    /// Returns the raw text of a value that failed to parse.
    pub fn unrecognized(&self) -> Option<&str> {
        match self {
            Lenient::Known(_) => None,
            Lenient::Unrecognized(raw) => Some(raw),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Known(value)
    }
}

impl<T: FromStr> Lenient<T> {
    /// Parse `raw`, keeping the original text when it is not a known value.
    ///
    /// Matching is exact: no case folding or trimming.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<T>() {
            Ok(value) => Lenient::Known(value),
            Err(_) => Lenient::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lenient::Known(value) => write!(f, "{value}"),
            Lenient::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Lenient::parse(&raw))
    }
}

impl<T: fmt::Display> Serialize for Lenient<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
