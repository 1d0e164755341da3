//! Per-operation execution context.

use election_types::{Identity, Timestamp};

/// The ambient values of a single operation: who is calling, and when.
///
/// The host ledger builds one of these per submitted operation. Neither
/// value can be changed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    caller: Identity,
    now: Timestamp,
}

impl Context {
    pub fn new(caller: Identity, now: Timestamp) -> Self {
        Self { caller, now }
    }

    pub fn caller(&self) -> &Identity {
        &self.caller
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }
}
