//! Numeric resource pools (budgets, water limits) and guarded settlement.

use core::fmt::Debug;
use core::ops::{AddAssign, SubAssign};

use serde::{Deserialize, Serialize};

/// Outcome of a guarded settlement.
///
/// Both states are terminal: a settlement is evaluated once and never retried.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Settlement {
    /// The pool covered the amount and was decreased by it.
    Success,
    /// The pool could not cover the amount and was left unchanged.
    Insufficient,
}

impl Settlement {
    pub fn is_success(self) -> bool {
        self == Settlement::Success
    }
}

/// A numeric amount owned by a ledger.
///
/// `increase` and `decrease` are plain arithmetic with no lower bound, so
/// the pool may go negative. [`settle`](Self::settle) is the guarded path.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourcePool<T> {
    available: T,
}

impl<T> ResourcePool<T>
where
    T: Copy + PartialOrd + AddAssign + SubAssign + Debug,
{
    pub fn new(available: T) -> Self {
        Self { available }
    }

    pub fn available(&self) -> T {
        self.available
    }

    pub fn increase(&mut self, amount: T) {
        self.available += amount;
    }

    pub fn decrease(&mut self, amount: T) {
        self.available -= amount;
    }

    pub fn can_afford(&self, amount: T) -> bool {
        amount <= self.available
    }

    /// Decrease the pool by `amount` only if it can afford it.
    pub fn settle(&mut self, amount: T) -> Settlement {
        if self.can_afford(amount) {
            self.decrease(amount);
            Settlement::Success
        } else {
            tracing::warn!(
                required = ?amount,
                available = ?self.available,
                "insufficient pool for settlement"
            );
            Settlement::Insufficient
        }
    }
}
