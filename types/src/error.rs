//! Errors raised while constructing or parsing the shared value types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}
