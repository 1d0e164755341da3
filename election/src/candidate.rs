//! Candidate registry.

use election_types::FundAmount;
use serde::{Deserialize, Serialize};

use crate::error::ElectionError;

/// Candidate ids are 1-based and dense.
pub type CandidateId = u64;

/// A registered candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub vote_count: u64,
    pub funds_received: FundAmount,
}

/// Append-only list of candidates.
///
/// Candidate `n` lives at index `n - 1`, so the id range is always `1..=len`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.candidates.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All candidates in ascending id order.
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: CandidateId) -> Result<&Candidate, ElectionError> {
        self.index_of(id).map(|idx| &self.candidates[idx])
    }

    /// Fail with [`ElectionError::InvalidCandidateId`] unless `id` is in `1..=count`.
    pub fn validate(&self, id: CandidateId) -> Result<(), ElectionError> {
        self.index_of(id).map(|_| ())
    }

    fn index_of(&self, id: CandidateId) -> Result<usize, ElectionError> {
        if id == 0 || id > self.count() {
            return Err(ElectionError::InvalidCandidateId {
                id,
                count: self.count(),
            });
        }
        Ok((id - 1) as usize)
    }

    fn get_mut(&mut self, id: CandidateId) -> Result<&mut Candidate, ElectionError> {
        let idx = self.index_of(id)?;
        Ok(&mut self.candidates[idx])
    }

    pub(crate) fn push(&mut self, name: String) -> CandidateId {
        let id = self.count() + 1;
        self.candidates.push(Candidate {
            id,
            name,
            vote_count: 0,
            funds_received: FundAmount::ZERO,
        });
        id
    }

    pub(crate) fn pop(&mut self) {
        self.candidates.pop();
    }

    pub(crate) fn increment_votes(&mut self, id: CandidateId) -> Result<(), ElectionError> {
        let candidate = self.get_mut(id)?;
        candidate.vote_count += 1;
        Ok(())
    }

    pub(crate) fn decrement_votes(&mut self, id: CandidateId) {
        if let Ok(candidate) = self.get_mut(id) {
            candidate.vote_count = candidate.vote_count.saturating_sub(1);
        }
    }

    /// Add `amount` to the candidate's funds. Returns the previous balance.
    pub(crate) fn credit(
        &mut self,
        id: CandidateId,
        amount: FundAmount,
    ) -> Result<FundAmount, ElectionError> {
        let candidate = self.get_mut(id)?;
        let previous = candidate.funds_received;
        candidate.funds_received = previous
            .checked_add(amount)
            .ok_or(ElectionError::FundsOverflow(id))?;
        Ok(previous)
    }

    pub(crate) fn set_funds(&mut self, id: CandidateId, funds: FundAmount) {
        if let Ok(candidate) = self.get_mut(id) {
            candidate.funds_received = funds;
        }
    }
}
