//! Workflow phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// The four stages of an election.
///
/// Ordered for display only: the engine accepts any phase at any time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Phase {
    /// Operators register candidates.
    #[default]
    Registration,
    /// Sponsors fund candidates; no registrations or votes.
    Founding,
    /// Any identity may cast one vote, after the opening delay.
    Voting,
    /// Terminal stage: the winner can be designated.
    Completed,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Registration,
        Phase::Founding,
        Phase::Voting,
        Phase::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Founding => "founding",
            Self::Voting => "voting",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypesError::UnknownPhase(s.to_string()))
    }
}
