//! Zoo management ledger.
//!
//! A zoo owns a budget and a daily water limit, employs keepers and houses
//! animals. Each animal can be assigned to at most one keeper; keepers are paid
//! per liable animal. Pure in-memory domain logic.

pub mod animal;
pub mod keeper;
pub mod zoo;

pub use animal::Animal;
pub use keeper::{IDLE_SALARY_WEIGHT, SALARY_PER_ANIMAL, ZooKeeper};
pub use zoo::{Zoo, ZooOperations};
