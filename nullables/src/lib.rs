//! Nullable infrastructure for deterministic testing.
//!
//! The host ledger's ambient clock and its value-transfer primitive are
//! abstracted away from the engine. This crate provides test-friendly
//! stand-ins that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record what the engine asked of them
//!
//! Usage: swap host implementations for nullables in tests.

pub mod clock;
pub mod transfer;

pub use clock::NullClock;
pub use transfer::{NullTransfer, RecordedTransfer};
