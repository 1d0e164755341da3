//! Value-transfer primitive trait.

use crate::TransferError;
use election_types::{FundAmount, Identity};

/// Moves value between accounts.
///
/// A call either moves the full `amount` or returns an error having moved
/// nothing. The engine calls it last in an operation, so an error reverts
/// the whole operation.
pub trait ValueTransfer {
    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: FundAmount,
    ) -> Result<(), TransferError>;
}
