//! Access-control roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Roles recognised by the engine's gated operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative control: phases, candidates, role grants.
    Operator,
    /// May transfer value to candidates.
    Sponsor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Sponsor => "sponsor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "operator" => Ok(Self::Operator),
            "sponsor" => Ok(Self::Sponsor),
            _ => Err(TypesError::UnknownRole(s.to_string())),
        }
    }
}
