//! Fundamental types for the staged election engine.
//!
//! This crate defines the value types shared by every other crate in the
//! workspace: caller identities, fund amounts, timestamps, workflow phases
//! and access-control roles.

pub mod amount;
pub mod error;
pub mod identity;
pub mod phase;
pub mod role;
pub mod time;

pub use amount::FundAmount;
pub use error::TypesError;
pub use identity::Identity;
pub use phase::Phase;
pub use role::Role;
pub use time::Timestamp;
