use serde::{Deserialize, Serialize};

use ledgerkit_core::Dependent;

/// Salary paid per year of age per seniority weight point.
pub const SALARY_UNIT: f64 = 1_000.0;

/// Marital status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
}

/// Seniority level; its weight scales the salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeType {
    Junior,
    Middle,
    Senior,
}

impl EmployeeType {
    pub fn weight(self) -> u32 {
        match self {
            EmployeeType::Junior => 1,
            EmployeeType::Middle => 2,
            EmployeeType::Senior => 3,
        }
    }
}

/// An employee record (immutable once created).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: u32,
    marital_status: MaritalStatus,
    employee_type: EmployeeType,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        marital_status: MaritalStatus,
        employee_type: EmployeeType,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            marital_status,
            employee_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn marital_status(&self) -> MaritalStatus {
        self.marital_status
    }

    pub fn employee_type(&self) -> EmployeeType {
        self.employee_type
    }

    /// age × seniority weight × 1000.
    pub fn salary(&self) -> f64 {
        f64::from(self.age) * f64::from(self.employee_type.weight()) * SALARY_UNIT
    }
}

impl Dependent for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn salary_scales_with_seniority() {
        let junior = Employee::new("Alihan", 25, MaritalStatus::Single, EmployeeType::Junior);
        let senior = Employee::new("Kaan", 30, MaritalStatus::Single, EmployeeType::Senior);

        assert_eq!(junior.salary(), 25_000.0);
        assert_eq!(senior.salary(), 90_000.0);
    }

    #[test]
    fn marital_status_does_not_affect_salary() {
        let single = Employee::new("a", 40, MaritalStatus::Single, EmployeeType::Middle);
        let married = Employee::new("b", 40, MaritalStatus::Married, EmployeeType::Middle);
        assert_eq!(single.salary(), married.salary());
    }

    fn employee_type() -> impl Strategy<Value = EmployeeType> {
        prop_oneof![
            Just(EmployeeType::Junior),
            Just(EmployeeType::Middle),
            Just(EmployeeType::Senior),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: salary == age × weight × 1000 with weight in {1, 2, 3}.
        #[test]
        fn salary_is_age_times_weight_times_unit(
            age in 0u32..120,
            kind in employee_type()
        ) {
            let employee = Employee::new("e", age, MaritalStatus::Single, kind);
            let weight = kind.weight();

            prop_assert!((1..=3).contains(&weight));
            prop_assert_eq!(employee.salary(), f64::from(age * weight * 1000));
        }
    }
}
