//! Company payroll ledger.
//!
//! A company owns a budget and a roster of employees whose salaries are paid
//! from it. Pure in-memory domain logic.

pub mod company;
pub mod employee;

pub use company::{Company, CompanyOperations, Payroll};
pub use employee::{Employee, EmployeeType, MaritalStatus, SALARY_UNIT};
