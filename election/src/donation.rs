//! Donation ledger — audit trail of sponsor funding.

use election_types::{FundAmount, Identity, Timestamp};
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;

/// One accepted donation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub sponsor: Identity,
    pub candidate_id: CandidateId,
    pub amount: FundAmount,
    pub at: Timestamp,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DonationLedger {
    records: Vec<DonationRecord>,
}

impl DonationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DonationRecord] {
        &self.records
    }

    pub fn for_candidate(&self, id: CandidateId) -> Vec<&DonationRecord> {
        self.records
            .iter()
            .filter(|r| r.candidate_id == id)
            .collect()
    }

    pub fn by_sponsor(&self, sponsor: &Identity) -> Vec<&DonationRecord> {
        self.records.iter().filter(|r| &r.sponsor == sponsor).collect()
    }

    /// Sum of every accepted donation. `None` on overflow: each candidate's
    /// funds are bounded, the sum across candidates is not.
    pub fn total(&self) -> Option<FundAmount> {
        self.records
            .iter()
            .try_fold(FundAmount::ZERO, |acc, r| acc.checked_add(r.amount))
    }

    pub(crate) fn push(&mut self, record: DonationRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) {
        self.records.pop();
    }
}
