//! Fund amount type.
//!
//! Amounts are fixed-point integers (u128) in the smallest transferable unit.
//! There are no negative amounts; a "non-positive" amount is exactly zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of value moved by the transfer primitive.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FundAmount(u128);

impl FundAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

}

impl From<u128> for FundAmount {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FundAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
