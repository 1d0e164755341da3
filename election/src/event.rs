//! Events emitted by committed operations.

use election_types::{FundAmount, Identity, Phase, Role, Timestamp};
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;

/// A state change the engine committed. Failed operations emit nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElectionEvent {
    PhaseChanged {
        from: Phase,
        to: Phase,
        by: Identity,
        at: Timestamp,
    },
    CandidateAdded {
        id: CandidateId,
        name: String,
        at: Timestamp,
    },
    VoteCast {
        voter: Identity,
        candidate_id: CandidateId,
        at: Timestamp,
    },
    DonationReceived {
        sponsor: Identity,
        candidate_id: CandidateId,
        amount: FundAmount,
        at: Timestamp,
    },
    RoleGranted {
        role: Role,
        identity: Identity,
        by: Identity,
        at: Timestamp,
    },
    RoleRevoked {
        role: Role,
        identity: Identity,
        by: Identity,
        at: Timestamp,
    },
}

impl ElectionEvent {
    pub fn at(&self) -> Timestamp {
        match self {
            Self::PhaseChanged { at, .. }
            | Self::CandidateAdded { at, .. }
            | Self::VoteCast { at, .. }
            | Self::DonationReceived { at, .. }
            | Self::RoleGranted { at, .. }
            | Self::RoleRevoked { at, .. } => *at,
        }
    }
}
