//! Election state and the apply-or-rollback transaction around it.
//!
//! Every state-changing operation opens a [`Transaction`], mutates through
//! it, and calls [`Transaction::commit`] once nothing else can fail. If the
//! transaction is dropped without committing, every mutation it made is
//! undone in reverse order, so a failed operation leaves no trace.

use election_types::{FundAmount, Identity, Phase, Timestamp};

use crate::ballot::BallotLedger;
use crate::candidate::{CandidateId, CandidateRegistry};
use crate::donation::{DonationLedger, DonationRecord};
use crate::error::ElectionError;
use crate::event::ElectionEvent;
use crate::phase::PhaseController;

/// Everything the engine owns.
#[derive(Clone, Debug, Default)]
pub struct ElectionState {
    pub phase: PhaseController,
    pub candidates: CandidateRegistry,
    pub ballot: BallotLedger,
    pub donations: DonationLedger,
    pub events: Vec<ElectionEvent>,
}

/// Inverse of one applied mutation.
#[derive(Debug)]
enum Undo {
    Phase {
        phase: Phase,
        vote_start_time: Timestamp,
    },
    CandidateAdded,
    VoteCounted(CandidateId),
    VoterMarked(Identity),
    FundsCredited {
        id: CandidateId,
        previous: FundAmount,
    },
    DonationRecorded,
    EventEmitted,
}

/// A set of mutations applied together or not at all.
pub struct Transaction<'a> {
    state: &'a mut ElectionState,
    journal: Vec<Undo>,
    committed: bool,
}

impl<'a> Transaction<'a> {
    pub fn begin(state: &'a mut ElectionState) -> Self {
        Self {
            state,
            journal: Vec::new(),
            committed: false,
        }
    }

    pub fn set_phase(&mut self, phase: Phase, now: Timestamp) {
        self.journal.push(Undo::Phase {
            phase: self.state.phase.current(),
            vote_start_time: self.state.phase.vote_start_time(),
        });
        self.state.phase.set(phase, now);
    }

    pub fn add_candidate(&mut self, name: String) -> CandidateId {
        let id = self.state.candidates.push(name);
        self.journal.push(Undo::CandidateAdded);
        id
    }

    /// Mark `voter` as having voted and count one vote for `id`.
    pub fn record_vote(&mut self, voter: &Identity, id: CandidateId) -> Result<(), ElectionError> {
        self.state.candidates.increment_votes(id)?;
        self.journal.push(Undo::VoteCounted(id));
        if self.state.ballot.mark(voter) {
            self.journal.push(Undo::VoterMarked(voter.clone()));
        }
        Ok(())
    }

    pub fn credit_funds(&mut self, id: CandidateId, amount: FundAmount) -> Result<(), ElectionError> {
        let previous = self.state.candidates.credit(id, amount)?;
        self.journal.push(Undo::FundsCredited { id, previous });
        Ok(())
    }

    pub fn record_donation(&mut self, record: DonationRecord) {
        self.state.donations.push(record);
        self.journal.push(Undo::DonationRecorded);
    }

    pub fn emit(&mut self, event: ElectionEvent) {
        self.state.events.push(event);
        self.journal.push(Undo::EventEmitted);
    }

    /// Keep every mutation made through this transaction.
    pub fn commit(mut self) {
        self.journal.clear();
        self.committed = true;
    }

    fn rollback(&mut self) {
        while let Some(undo) = self.journal.pop() {
            match undo {
                Undo::Phase {
                    phase,
                    vote_start_time,
                } => self.state.phase.restore(phase, vote_start_time),
                Undo::CandidateAdded => self.state.candidates.pop(),
                Undo::VoteCounted(id) => self.state.candidates.decrement_votes(id),
                Undo::VoterMarked(voter) => self.state.ballot.unmark(&voter),
                Undo::FundsCredited { id, previous } => {
                    self.state.candidates.set_funds(id, previous)
                }
                Undo::DonationRecorded => self.state.donations.pop(),
                Undo::EventEmitted => {
                    self.state.events.pop();
                }
            }
        }
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed && !self.journal.is_empty() {
            tracing::debug!(mutations = self.journal.len(), "rolling back transaction");
            self.rollback();
        }
    }
}
