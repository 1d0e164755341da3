use election_types::FundAmount;
use thiserror::Error;

/// Failure reported by the value-transfer primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        needed: FundAmount,
        available: FundAmount,
    },

    #[error("balance overflow crediting {0}")]
    Overflow(String),

    #[error("transfer rejected: {0}")]
    Rejected(String),
}
