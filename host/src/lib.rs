//! Host ledger collaborator contracts.
//!
//! The election engine never reads ambient globals or stores role data.
//! Everything it needs from the host ledger is expressed here:
//! - [`Context`]: the caller identity and timestamp of one operation
//! - [`RoleService`]: role-membership queries and grants
//! - [`ValueTransfer`]: the atomic value-movement primitive
//!
//! In-memory implementations ([`MemoryRoles`], [`BalanceLedger`]) are
//! provided for embedding the engine outside a real ledger.

pub mod context;
pub mod error;
pub mod memory;
pub mod roles;
pub mod transfer;

pub use context::Context;
pub use error::TransferError;
pub use memory::{BalanceLedger, MemoryRoles};
pub use roles::RoleService;
pub use transfer::ValueTransfer;
