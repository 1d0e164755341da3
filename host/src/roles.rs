//! Role-membership service trait.

use election_types::{Identity, Role};

/// Answers "does identity X hold role R?" and records grants.
///
/// Implementations do no authorization of their own: the engine checks that
/// the caller is an Operator before delegating `grant_role`/`revoke_role`.
pub trait RoleService {
    /// Whether `identity` currently holds `role`.
    fn has_role(&self, identity: &Identity, role: Role) -> bool;

    /// Grant `role` to `identity`. Returns `false` if it was already held.
    fn grant_role(&mut self, role: Role, identity: &Identity) -> bool;

    /// Revoke `role` from `identity`. Returns `false` if it was not held.
    fn revoke_role(&mut self, role: Role, identity: &Identity) -> bool;
}
