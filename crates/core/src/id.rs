//! Strongly-typed identifiers used across the ledgers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Position of a dependent inside a [`Roster`](crate::Roster).
///
/// Keys are handed out in insertion order starting at zero. Rosters never
/// remove entries, so a key stays valid for the lifetime of its roster.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterKey(u32);

impl RosterKey {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The key following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for RosterKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for RosterKey {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<RosterKey> for u32 {
    fn from(value: RosterKey) -> Self {
        value.0
    }
}

impl FromStr for RosterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("RosterKey: {e}")))?;
        Ok(Self(value))
    }
}
