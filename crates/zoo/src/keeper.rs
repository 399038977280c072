use serde::{Deserialize, Serialize};

use ledgerkit_core::Dependent;

/// Salary paid per liable animal.
pub const SALARY_PER_ANIMAL: f64 = 1_000.0;

/// Salary weight applied when a keeper has no animals yet.
pub const IDLE_SALARY_WEIGHT: f64 = 0.75;

/// A zookeeper and the animals they are responsible for.
///
/// The animal→keeper assignment lives here, denormalized: the zoo enforces
/// that an animal name appears in at most one keeper's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZooKeeper {
    name: String,
    liable_animal_names: Vec<String>,
}

impl ZooKeeper {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            liable_animal_names: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Animal names in the order they were assigned.
    pub fn liable_animal_names(&self) -> &[String] {
        &self.liable_animal_names
    }

    pub fn is_responsible_for(&self, animal_name: &str) -> bool {
        self.liable_animal_names.iter().any(|n| n == animal_name)
    }

    /// `n × 1000` for `n` liable animals, or 750 with none.
    pub fn salary(&self) -> f64 {
        let weight = match self.liable_animal_names.len() {
            0 => IDLE_SALARY_WEIGHT,
            n => n as f64,
        };
        weight * SALARY_PER_ANIMAL
    }

    pub(crate) fn take_responsibility(&mut self, animal_name: impl Into<String>) {
        self.liable_animal_names.push(animal_name.into());
    }
}

impl Dependent for ZooKeeper {
    fn name(&self) -> &str {
        &self.name
    }
}
