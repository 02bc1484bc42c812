//! Zone player identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a zone player
///
/// Derived from the device's UDN, which usually has the format
/// "uuid:RINCON_xxxxx".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new PlayerId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        PlayerId::new(s)
    }
}
