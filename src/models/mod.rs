//! Core data models for the Compensation Status Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod salary;
mod status_report;

pub use employee::EmployeeRecord;
pub use salary::SalaryRecord;
pub use status_report::{AdjustedSalary, SalaryStatus, StatusReport};
