//! In-memory collaborators for running the engine without a host ledger.

use std::collections::{BTreeSet, HashMap};

use election_types::{FundAmount, Identity, Role};

use crate::roles::RoleService;
use crate::transfer::ValueTransfer;
use crate::TransferError;

/// Role registry backed by a map of role → members.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoles {
    members: HashMap<Role, BTreeSet<Identity>>,
}

impl MemoryRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// All identities holding `role`, in sorted order.
    pub fn members(&self, role: Role) -> Vec<&Identity> {
        self.members
            .get(&role)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }
}

impl RoleService for MemoryRoles {
    fn has_role(&self, identity: &Identity, role: Role) -> bool {
        self.members
            .get(&role)
            .is_some_and(|set| set.contains(identity))
    }

    fn grant_role(&mut self, role: Role, identity: &Identity) -> bool {
        self.members.entry(role).or_default().insert(identity.clone())
    }

    fn revoke_role(&mut self, role: Role, identity: &Identity) -> bool {
        let Some(set) = self.members.get_mut(&role) else {
            return false;
        };
        let removed = set.remove(identity);
        if set.is_empty() {
            self.members.remove(&role);
        }
        removed
    }
}

/// Per-identity balances with all-or-nothing transfers.
#[derive(Clone, Debug, Default)]
pub struct BalanceLedger {
    balances: HashMap<Identity, FundAmount>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add funds to an account out of thin air (genesis allocation).
    pub fn mint(&mut self, to: &Identity, amount: FundAmount) -> Result<(), TransferError> {
        let current = self.balance_of(to);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| TransferError::Overflow(to.to_string()))?;
        self.balances.insert(to.clone(), updated);
        Ok(())
    }

    pub fn balance_of(&self, identity: &Identity) -> FundAmount {
        self.balances.get(identity).copied().unwrap_or_default()
    }
}

impl ValueTransfer for BalanceLedger {
    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: FundAmount,
    ) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        let debited = available
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientBalance {
                needed: amount,
                available,
            })?;

        if from == to {
            return Ok(());
        }

        // Compute both sides before writing either.
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| TransferError::Overflow(to.to_string()))?;

        self.balances.insert(from.clone(), debited);
        self.balances.insert(to.clone(), credited);
        tracing::trace!(%from, %to, %amount, "value transferred");
        Ok(())
    }
}
