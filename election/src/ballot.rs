//! Ballot ledger — who has voted.

use std::collections::HashSet;

use election_types::Identity;
use serde::{Deserialize, Serialize};

/// Per-identity voted flag. An identity is absent until its first vote.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BallotLedger {
    voters: HashSet<Identity>,
}

impl BallotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_voted(&self, voter: &Identity) -> bool {
        self.voters.contains(voter)
    }

    /// Returns `false` if the voter was already marked.
    pub(crate) fn mark(&mut self, voter: &Identity) -> bool {
        self.voters.insert(voter.clone())
    }

    pub(crate) fn unmark(&mut self, voter: &Identity) {
        self.voters.remove(voter);
    }
}
