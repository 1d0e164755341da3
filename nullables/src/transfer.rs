//! Nullable value transfer — records transfers, fails on demand.

use election_host::{TransferError, ValueTransfer};
use election_types::{FundAmount, Identity};

/// A transfer the engine asked for and that was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedTransfer {
    pub from: Identity,
    pub to: Identity,
    pub amount: FundAmount,
}

/// A value-transfer primitive that accepts everything unless told otherwise.
#[derive(Debug, Default)]
pub struct NullTransfer {
    accepted: Vec<RecordedTransfer>,
    fail_next: Option<TransferError>,
    fail_always: Option<TransferError>,
}

impl NullTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next transfer with `err`, then go back to accepting.
    pub fn fail_next(&mut self, err: TransferError) {
        self.fail_next = Some(err);
    }

    /// Reject every transfer with `err` until [`NullTransfer::recover`] is called.
    pub fn fail_always(&mut self, err: TransferError) {
        self.fail_always = Some(err);
    }

    pub fn recover(&mut self) {
        self.fail_next = None;
        self.fail_always = None;
    }

    /// Transfers that went through, oldest first.
    pub fn accepted(&self) -> &[RecordedTransfer] {
        &self.accepted
    }
}

impl ValueTransfer for NullTransfer {
    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: FundAmount,
    ) -> Result<(), TransferError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        if let Some(err) = &self.fail_always {
            return Err(err.clone());
        }
        self.accepted.push(RecordedTransfer {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }
}
