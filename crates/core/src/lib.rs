//! `ledgerkit-core` — shared ledger building blocks.
//!
//! Resource pools, name-unique rosters and the domain error type used by the
//! company and zoo ledgers. Pure in-memory logic, no IO.

pub mod dependent;
pub mod error;
pub mod id;
pub mod pool;
pub mod roster;

pub use dependent::Dependent;
pub use error::{DomainError, DomainResult};
pub use id::RosterKey;
pub use pool::{ResourcePool, Settlement};
pub use roster::Roster;
