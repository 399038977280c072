use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use ledgerkit_core::{ResourcePool, Roster, RosterKey, Settlement};

use crate::employee::Employee;

/// Operations a company ledger exposes to its callers.
pub trait CompanyOperations {
    fn increase_budget(&mut self, amount: f64);

    fn decrease_budget(&mut self, amount: f64);

    /// Add an employee; a name already on the payroll is ignored.
    fn add_employee(&mut self, employee: Employee) -> Option<RosterKey>;

    /// Pay every employee from the budget, unconditionally.
    fn pay_salaries(&mut self) -> Payroll;
}

/// Summary of a salary run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    pub employees_paid: usize,
    pub total: f64,
}

/// Company ledger: a budget and the employees paid from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    name: String,
    budget: ResourcePool<f64>,
    foundation_year: i32,
    employees: Roster<Employee>,
}

impl Company {
    pub fn new(name: impl Into<String>, budget: f64, foundation_year: i32) -> Self {
        Self {
            name: name.into(),
            budget: ResourcePool::new(budget),
            foundation_year,
            employees: Roster::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> f64 {
        self.budget.available()
    }

    pub fn foundation_year(&self) -> i32 {
        self.foundation_year
    }

    /// Whole calendar years between the foundation year and `on`.
    pub fn age_in_years(&self, on: NaiveDate) -> i32 {
        on.year() - self.foundation_year
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn employees(&self) -> &Roster<Employee> {
        &self.employees
    }

    pub fn find_employee(&self, name: &str) -> Option<&Employee> {
        self.employees.find_by_name(name)
    }

    /// Sum of all employees' salaries.
    pub fn total_salaries(&self) -> f64 {
        self.employees.iter().map(Employee::salary).sum()
    }

    /// Pay salaries only if the budget covers them.
    ///
    /// On [`Settlement::Insufficient`] the budget is left unchanged.
    pub fn try_pay_salaries(&mut self) -> Settlement {
        let total = self.total_salaries();
        let outcome = self.budget.settle(total);
        tracing::info!(
            company = %self.name,
            employees = self.employees.len(),
            total,
            ?outcome,
            budget = self.budget.available(),
            "salary settlement"
        );
        outcome
    }
}

impl CompanyOperations for Company {
    fn increase_budget(&mut self, amount: f64) {
        self.budget.increase(amount);
    }

    fn decrease_budget(&mut self, amount: f64) {
        self.budget.decrease(amount);
    }

    fn add_employee(&mut self, employee: Employee) -> Option<RosterKey> {
        self.employees.add(employee)
    }

    fn pay_salaries(&mut self) -> Payroll {
        let payroll = Payroll {
            employees_paid: self.employees.len(),
            total: self.total_salaries(),
        };
        self.decrease_budget(payroll.total);

        tracing::info!(
            company = %self.name,
            employees = payroll.employees_paid,
            total = payroll.total,
            budget = self.budget.available(),
            "salaries paid"
        );
        payroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{EmployeeType, MaritalStatus};
    use proptest::prelude::*;

    fn junior(name: &str, age: u32) -> Employee {
        Employee::new(name, age, MaritalStatus::Single, EmployeeType::Junior)
    }

    #[test]
    fn budget_adjustments_are_unbounded() {
        let mut company = Company::new("Acme", 100.0, 2000);
        company.increase_budget(50.0);
        assert_eq!(company.budget(), 150.0);

        company.decrease_budget(1_000.0);
        assert_eq!(company.budget(), -850.0);
    }

    #[test]
    fn add_employee_ignores_duplicate_names() {
        let mut company = Company::new("Acme", 0.0, 2000);
        assert_eq!(company.add_employee(junior("Ann", 20)), Some(RosterKey::new(0)));
        assert_eq!(company.add_employee(junior("Ann", 45)), None);

        assert_eq!(company.employee_count(), 1);
        assert_eq!(company.find_employee("Ann").unwrap().age(), 20);
    }

    #[test]
    fn find_employee_returns_none_for_unknown_name() {
        let company = Company::new("Acme", 0.0, 2000);
        assert!(company.find_employee("Nobody").is_none());
    }

    #[test]
    fn pay_salaries_may_overdraw_budget() {
        let mut company = Company::new("Acme", 10_000.0, 2000);
        company.add_employee(junior("Ann", 20));

        let payroll = company.pay_salaries();
        assert_eq!(payroll.employees_paid, 1);
        assert_eq!(payroll.total, 20_000.0);
        assert_eq!(company.budget(), -10_000.0);
    }

    #[test]
    fn pay_salaries_with_no_employees_is_a_noop() {
        let mut company = Company::new("Acme", 500.0, 2000);
        let payroll = company.pay_salaries();
        assert_eq!(payroll.total, 0.0);
        assert_eq!(company.budget(), 500.0);
    }

    #[test]
    fn try_pay_salaries_guards_budget() {
        let mut company = Company::new("Acme", 10_000.0, 2000);
        company.add_employee(junior("Ann", 20));

        assert_eq!(company.try_pay_salaries(), Settlement::Insufficient);
        assert_eq!(company.budget(), 10_000.0);

        company.increase_budget(10_000.0);
        assert_eq!(company.try_pay_salaries(), Settlement::Success);
        assert_eq!(company.budget(), 0.0);
    }

    #[test]
    fn age_in_years_counts_from_foundation_year() {
        let company = Company::new("VakifBank", 0.0, 1954);
        let on = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(company.age_in_years(on), 70);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: an unguarded salary run always lowers the budget by the
        /// sum of the salaries.
        #[test]
        fn pay_salaries_subtracts_total(
            budget in 0u32..10_000_000,
            ages in prop::collection::vec(18u32..70, 0..8)
        ) {
            let mut company = Company::new("Acme", f64::from(budget), 2000);
            for (i, age) in ages.iter().enumerate() {
                company.add_employee(junior(&format!("e{i}"), *age));
            }

            let expected: u32 = ages.iter().map(|a| a * 1000).sum();
            let payroll = company.pay_salaries();

            prop_assert_eq!(payroll.employees_paid, ages.len());
            prop_assert_eq!(payroll.total, f64::from(expected));
            prop_assert_eq!(company.budget(), f64::from(budget) - f64::from(expected));
        }
    }
}
