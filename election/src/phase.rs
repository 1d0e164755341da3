//! Workflow phase controller.

use election_types::{Phase, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::ElectionError;

/// Holds the current phase and the instant voting was last opened.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseController {
    current: Phase,
    vote_start_time: Timestamp,
}

impl PhaseController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// When `Voting` was last entered. [`Timestamp::EPOCH`] if never.
    pub fn vote_start_time(&self) -> Timestamp {
        self.vote_start_time
    }

    /// Fail with [`ElectionError::WrongPhase`] unless the current phase is `expected`.
    pub fn require(&self, expected: Phase) -> Result<(), ElectionError> {
        if self.current != expected {
            return Err(ElectionError::WrongPhase {
                expected,
                actual: self.current,
            });
        }
        Ok(())
    }

    /// First instant at which a vote is accepted.
    pub fn voting_opens_at(&self, delay_secs: u64) -> Timestamp {
        self.vote_start_time.plus_secs(delay_secs)
    }

    /// Whether the opening delay has fully elapsed at `now` (boundary inclusive).
    pub fn is_voting_open(&self, delay_secs: u64, now: Timestamp) -> bool {
        self.vote_start_time.has_expired(delay_secs, now)
    }

    /// Any phase may follow any other. Entering `Voting`, including from
    /// `Voting`, restarts the vote clock at `now`.
    pub(crate) fn set(&mut self, phase: Phase, now: Timestamp) {
        self.current = phase;
        if phase == Phase::Voting {
            self.vote_start_time = now;
        }
    }

    pub(crate) fn restore(&mut self, phase: Phase, vote_start_time: Timestamp) {
        self.current = phase;
        self.vote_start_time = vote_start_time;
    }
}
