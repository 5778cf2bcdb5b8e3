//! Employee payroll, reporting and storage as three separate jobs.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Plain employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Full name
    pub name: String,
    /// Job title
    pub position: String,
    /// Salary before adjustments
    pub base_salary: f64,
}

impl Employee {
    /// Builds an employee record
    pub fn new(name: impl Into<String>, position: impl Into<String>, base_salary: f64) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            base_salary,
        }
    }
}

/// Applies the 20% uplift to the base salary
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    /// Uplift multiplier
    pub const MULTIPLIER: f64 = 1.2;

    /// Adjusted salary for `employee`
    #[must_use]
    pub fn calculate(&self, employee: &Employee) -> f64 {
        employee.base_salary * Self::MULTIPLIER
    }
}

/// Produces the one-line performance summary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeReport;

impl EmployeeReport {
    /// `{name} works as {position}.`
    #[must_use]
    pub fn generate(&self, employee: &Employee) -> String {
        format!("{} works as {}.", employee.name, employee.position)
    }
}

/// Persists employee records
pub trait EmployeeStore {
    /// Stores a copy of `employee`
    ///
    /// # Errors
    ///
    /// Implementation-specific storage failures.
    fn save(&mut self, employee: &Employee) -> Result<()>;
}

/// Keeps employees in a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeStore {
    /// Empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Stored employees, oldest first
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn save(&mut self, employee: &Employee) -> Result<()> {
        tracing::debug!(name = %employee.name, "saving employee");
        self.employees.push(employee.clone());
        Ok(())
    }
}
