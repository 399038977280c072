//! Ordered, name-unique collection of dependents.

use serde::Serialize;

use crate::dependent::Dependent;
use crate::error::{DomainError, DomainResult};
use crate::id::RosterKey;

/// Ordered roster of dependents.
///
/// Entries keep their insertion order and receive consecutive [`RosterKey`]s.
/// There is no removal, so the key of an entry equals its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster<D> {
    entries: Vec<D>,
}

impl<D> Default for Roster<D> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<D: Dependent> Roster<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependent, rejecting a name that is already present.
    pub fn insert(&mut self, dependent: D) -> DomainResult<RosterKey> {
        if self.contains(dependent.name()) {
            return Err(DomainError::conflict(format!(
                "'{}' is already on the roster",
                dependent.name()
            )));
        }

        let key = self.next_key();
        self.entries.push(dependent);
        Ok(key)
    }

    /// Insert a dependent, silently ignoring duplicates.
    ///
    /// Returns the new key, or `None` when the name was already taken.
    pub fn add(&mut self, dependent: D) -> Option<RosterKey> {
        match self.insert(dependent) {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring duplicate dependent");
                None
            }
        }
    }

    /// First dependent whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&D> {
        self.entries.iter().find(|d| d.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut D> {
        self.entries.iter_mut().find(|d| d.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn get(&self, key: RosterKey) -> Option<&D> {
        self.entries.get(key.index())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dependents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.entries.iter()
    }

    /// `(key, dependent)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (RosterKey, &D)> {
        (0u32..).map(RosterKey::new).zip(self.entries.iter())
    }

    fn next_key(&self) -> RosterKey {
        RosterKey::new(self.entries.len() as u32)
    }
}

impl<'a, D> IntoIterator for &'a Roster<D> {
    type Item = &'a D;
    type IntoIter = core::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
