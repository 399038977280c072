use serde::Serialize;

use ledgerkit_core::{DomainError, DomainResult, ResourcePool, Roster, RosterKey, Settlement};

use crate::animal::Animal;
use crate::keeper::ZooKeeper;

/// Operations a zoo ledger exposes to its callers.
pub trait ZooOperations {
    fn increase_budget(&mut self, amount: f64);

    fn decrease_budget(&mut self, amount: f64);

    fn increase_water_limit(&mut self, amount: i64);

    fn decrease_water_limit(&mut self, amount: i64);

    /// Add a keeper; a name already on staff is ignored.
    fn add_zoo_keeper(&mut self, keeper: ZooKeeper) -> Option<RosterKey>;

    /// Add an animal; a name already in the zoo is ignored.
    fn add_animal(&mut self, animal: Animal) -> Option<RosterKey>;

    /// Draw the animals' total daily consumption from the water limit.
    fn water_animals(&mut self) -> Settlement;

    /// Pay every keeper from the budget.
    fn pay_zoo_keepers(&mut self) -> Settlement;
}

/// Zoo ledger: a budget, a daily water limit, keepers and animals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zoo {
    budget: ResourcePool<f64>,
    daily_water_limit: ResourcePool<i64>,
    zoo_keepers: Roster<ZooKeeper>,
    animals: Roster<Animal>,
}

impl Zoo {
    pub fn new(daily_water_limit: i64, budget: f64) -> Self {
        Self {
            budget: ResourcePool::new(budget),
            daily_water_limit: ResourcePool::new(daily_water_limit),
            zoo_keepers: Roster::new(),
            animals: Roster::new(),
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget.available()
    }

    pub fn daily_water_limit(&self) -> i64 {
        self.daily_water_limit.available()
    }

    pub fn zoo_keepers(&self) -> &Roster<ZooKeeper> {
        &self.zoo_keepers
    }

    pub fn animals(&self) -> &Roster<Animal> {
        &self.animals
    }

    pub fn find_zoo_keeper(&self, name: &str) -> Option<&ZooKeeper> {
        self.zoo_keepers.find_by_name(name)
    }

    pub fn find_animal(&self, name: &str) -> Option<&Animal> {
        self.animals.find_by_name(name)
    }

    /// The keeper responsible for `animal_name`, if any.
    pub fn keeper_of(&self, animal_name: &str) -> Option<&ZooKeeper> {
        self.zoo_keepers
            .iter()
            .find(|k| k.is_responsible_for(animal_name))
    }

    pub fn has_keeper(&self, animal_name: &str) -> bool {
        self.keeper_of(animal_name).is_some()
    }

    /// Animals nobody is responsible for yet, in insertion order.
    pub fn unassigned_animals(&self) -> impl Iterator<Item = &Animal> + '_ {
        self.animals.iter().filter(|a| !self.has_keeper(a.name()))
    }

    pub fn total_water_consumption(&self) -> i64 {
        self.animals.iter().map(Animal::daily_water_consumption).sum()
    }

    pub fn total_keeper_salaries(&self) -> f64 {
        self.zoo_keepers.iter().map(ZooKeeper::salary).sum()
    }

    /// Make `keeper_name` responsible for `animal_name`.
    ///
    /// First claim wins: an animal that already has a keeper (including this
    /// one) is never reassigned.
    pub fn try_assign(&mut self, keeper_name: &str, animal_name: &str) -> DomainResult<()> {
        if !self.zoo_keepers.contains(keeper_name) {
            return Err(DomainError::not_found(format!("zoo keeper '{keeper_name}'")));
        }
        if !self.animals.contains(animal_name) {
            return Err(DomainError::not_found(format!("animal '{animal_name}'")));
        }
        if let Some(owner) = self.keeper_of(animal_name) {
            return Err(DomainError::conflict(format!(
                "'{animal_name}' is already assigned to '{}'",
                owner.name()
            )));
        }

        let keeper = self
            .zoo_keepers
            .find_by_name_mut(keeper_name)
            .ok_or_else(|| DomainError::not_found(format!("zoo keeper '{keeper_name}'")))?;
        keeper.take_responsibility(animal_name);

        tracing::debug!(keeper = keeper_name, animal = animal_name, "responsibility assigned");
        Ok(())
    }

    /// Like [`try_assign`](Self::try_assign), but any failure is a silent no-op.
    pub fn assign(&mut self, keeper_name: &str, animal_name: &str) {
        if let Err(err) = self.try_assign(keeper_name, animal_name) {
            tracing::debug!(error = %err, "assignment skipped");
        }
    }
}

impl ZooOperations for Zoo {
    fn increase_budget(&mut self, amount: f64) {
        self.budget.increase(amount);
    }

    fn decrease_budget(&mut self, amount: f64) {
        self.budget.decrease(amount);
    }

    fn increase_water_limit(&mut self, amount: i64) {
        self.daily_water_limit.increase(amount);
    }

    fn decrease_water_limit(&mut self, amount: i64) {
        self.daily_water_limit.decrease(amount);
    }

    fn add_zoo_keeper(&mut self, keeper: ZooKeeper) -> Option<RosterKey> {
        self.zoo_keepers.add(keeper)
    }

    fn add_animal(&mut self, animal: Animal) -> Option<RosterKey> {
        self.animals.add(animal)
    }

    fn water_animals(&mut self) -> Settlement {
        let total = self.total_water_consumption();
        let outcome = self.daily_water_limit.settle(total);
        tracing::info!(
            animals = self.animals.len(),
            total,
            ?outcome,
            water_limit = self.daily_water_limit.available(),
            "water settlement"
        );
        outcome
    }

    fn pay_zoo_keepers(&mut self) -> Settlement {
        let total = self.total_keeper_salaries();
        let outcome = self.budget.settle(total);
        tracing::info!(
            keepers = self.zoo_keepers.len(),
            total,
            ?outcome,
            budget = self.budget.available(),
            "keeper salary settlement"
        );
        outcome
    }
}
