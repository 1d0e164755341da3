//! Caller identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// The identity a caller acts as.
///
/// Used as the key for role checks and for one-vote-per-identity
/// enforcement. The host ledger vouches for it; the engine never derives or
/// verifies identities on its own.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a raw string, trimmed like [`Identity::parse`].
    ///
    /// # Panics
    /// Panics if the trimmed string is empty. Use [`Identity::parse`] for untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        let trimmed = s.trim();
        assert!(!trimmed.is_empty(), "identity must not be empty");
        if trimmed.len() == s.len() {
            Self(s)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Fallible constructor for untrusted input.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TypesError::EmptyIdentity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identity {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identity {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
