//! Timestamp type used throughout the engine.
//!
//! Timestamps are Unix epoch seconds (UTC) as reported by the host ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp shifted forward, saturating at `u64::MAX`.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Whether `now` is at or past this timestamp + duration.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
