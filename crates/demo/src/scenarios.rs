//! The two reference scenarios: a bank paying its staff and a zoo day.

use serde::Serialize;

use ledgerkit_company::{Company, CompanyOperations, Employee, EmployeeType, MaritalStatus};
use ledgerkit_core::Settlement;
use ledgerkit_zoo::{Animal, Zoo, ZooKeeper, ZooOperations};

use crate::config::DemoConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    pub company: String,
    pub employees_paid: usize,
    pub salaries_total: f64,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZooReport {
    pub keepers: usize,
    pub animals: usize,
    pub unassigned_animals: Vec<String>,
    pub watering: Settlement,
    pub water_limit: i64,
    pub salaries: Settlement,
    pub budget: f64,
}

pub fn run_company(config: &DemoConfig) -> CompanyReport {
    let mut bank = Company::new("VakifBank", config.company_budget, 1954);
    bank.increase_budget(500_000.0);

    bank.add_employee(Employee::new(
        "Alihan KUZUCUK",
        25,
        MaritalStatus::Single,
        EmployeeType::Junior,
    ));
    bank.add_employee(Employee::new(
        "Kaan YILDIRIM",
        30,
        MaritalStatus::Single,
        EmployeeType::Senior,
    ));

    let payroll = bank.pay_salaries();
    println!(
        "{} salary paid on Company Budget. New budget is now {}",
        bank.employee_count(),
        bank.budget()
    );

    CompanyReport {
        company: bank.name().to_string(),
        employees_paid: payroll.employees_paid,
        salaries_total: payroll.total,
        budget: bank.budget(),
    }
}

pub fn run_zoo(config: &DemoConfig) -> ZooReport {
    const KEEPER: &str = "Alihan KUZUCUK";

    let mut zoo = Zoo::new(config.zoo_water_limit, config.zoo_budget);
    zoo.add_zoo_keeper(ZooKeeper::new(KEEPER));

    if zoo
        .add_animal(Animal::new("King Leo", "Leo", 10, "Krrrrr"))
        .is_some()
    {
        zoo.assign(KEEPER, "King Leo");
    }
    zoo.add_animal(Animal::new("Leo", "Leo", 5, "Hrrrrr"));

    if let Some(keeper) = zoo.find_zoo_keeper(KEEPER) {
        println!(
            "{} is responsible for {:?} and earns {}",
            keeper.name(),
            keeper.liable_animal_names(),
            keeper.salary()
        );
    }
    for animal in zoo.animals() {
        println!("{} says {}", animal.name(), animal.noise());
    }

    let watering = zoo.water_animals();
    let salaries = zoo.pay_zoo_keepers();
    println!(
        "Watering: {watering:?}, water left {}. Salaries: {salaries:?}, budget now {}",
        zoo.daily_water_limit(),
        zoo.budget()
    );

    ZooReport {
        keepers: zoo.zoo_keepers().len(),
        animals: zoo.animals().len(),
        unassigned_animals: zoo
            .unassigned_animals()
            .map(|a| a.name().to_string())
            .collect(),
        watering,
        water_limit: zoo.daily_water_limit(),
        salaries,
        budget: zoo.budget(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_scenario_pays_both_employees() {
        let report = run_company(&DemoConfig::default());
        assert_eq!(report.employees_paid, 2);
        assert_eq!(report.salaries_total, 115_000.0);
        assert_eq!(report.budget, 885_000.0);
    }

    #[test]
    fn zoo_scenario_settles_water_and_salaries() {
        let report = run_zoo(&DemoConfig::default());
        assert_eq!(report.keepers, 1);
        assert_eq!(report.animals, 2);
        assert_eq!(report.unassigned_animals, vec!["Leo".to_string()]);
        assert_eq!(report.watering, Settlement::Success);
        assert_eq!(report.water_limit, 985);
        assert_eq!(report.salaries, Settlement::Success);
        assert_eq!(report.budget, 999_000.0);
    }

    #[test]
    fn zoo_scenario_reports_dry_water_supply() {
        let config = DemoConfig {
            zoo_water_limit: 10,
            ..DemoConfig::default()
        };
        let report = run_zoo(&config);
        assert_eq!(report.watering, Settlement::Insufficient);
        assert_eq!(report.water_limit, 10);
    }
}
