//! Staged election workflow engine.
//!
//! 4-phase process: Registration → Founding → Voting → Completed.
//! - Operators register candidates during Registration and move the phase
//! - Any identity casts exactly one vote during Voting, once the opening delay has passed
//! - Sponsors may fund a candidate in any phase
//! - The winner (most votes, lowest id on ties) is designated once Completed
//!
//! Every operation runs against an explicit [`Context`](election_host::Context)
//! and either fully applies or leaves no trace.

pub mod ballot;
pub mod candidate;
pub mod config;
pub mod donation;
pub mod engine;
pub mod error;
pub mod event;
pub mod phase;
pub mod results;
pub mod state;

pub use ballot::BallotLedger;
pub use candidate::{Candidate, CandidateId, CandidateRegistry};
pub use config::ElectionConfig;
pub use donation::{DonationLedger, DonationRecord};
pub use engine::ElectionEngine;
pub use error::ElectionError;
pub use event::ElectionEvent;
pub use phase::PhaseController;
pub use results::leading_candidate;
pub use state::{ElectionState, Transaction};
