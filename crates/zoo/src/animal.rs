use serde::{Deserialize, Serialize};

use ledgerkit_core::Dependent;

/// An animal kept by the zoo (immutable once created).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    breed: String,
    daily_water_consumption: i64,
    noise: String,
}

impl Animal {
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        daily_water_consumption: i64,
        noise: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            daily_water_consumption,
            noise: noise.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn daily_water_consumption(&self) -> i64 {
        self.daily_water_consumption
    }

    pub fn noise(&self) -> &str {
        &self.noise
    }
}

impl Dependent for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}
