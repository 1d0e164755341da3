use election_host::TransferError;
use election_types::{Identity, Phase, Role, Timestamp};
use thiserror::Error;

use crate::candidate::CandidateId;

#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("{caller} does not hold the {role} role")]
    Unauthorized { caller: Identity, role: Role },

    #[error("operation requires the {expected} phase, current phase is {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("candidate name must not be empty")]
    EmptyName,

    #[error("candidate id {id} is outside the registered range 1..={count}")]
    InvalidCandidateId { id: CandidateId, count: u64 },

    #[error("voting opens at {opens_at}, it is {now}")]
    TooEarly { opens_at: Timestamp, now: Timestamp },

    #[error("{0} has already voted")]
    AlreadyVoted(Identity),

    #[error("donation amount must be greater than zero")]
    ZeroAmount,

    #[error("no candidates are registered")]
    NoCandidates,

    #[error("funds received by candidate {0} would overflow")]
    FundsOverflow(CandidateId),

    #[error("value transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("configuration error: {0}")]
    Config(String),
}
