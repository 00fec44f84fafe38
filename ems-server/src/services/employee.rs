//! Employee Service
//!
//! CRUD and search over employee records. Lookups addressed at a missing
//! id consistently raise a not-found error rather than returning null;
//! delete is the one idempotent exception.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeRepository,
}

impl EmployeeService {
    /// Create a new EmployeeService
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db),
        }
    }

    /// List all employees
    pub async fn get_all(&self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.find_all().await?)
    }

    /// Fetch a single employee by id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {}", id)))
    }

    /// Search employees by designation or department (OR semantics)
    pub async fn search(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        Ok(self
            .employees
            .find_by_designation_or_department(designation, department)
            .await?)
    }

    /// Add a new employee
    pub async fn add(&self, data: EmployeeCreate) -> AppResult<Employee> {
        let employee = self.employees.create(data).await?;

        tracing::info!(employee_id = %employee.id, "Employee created");

        Ok(employee)
    }

    /// Partially update an employee; only supplied fields change
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> AppResult<Employee> {
        let employee = self.employees.update(id, data).await?;

        tracing::info!(employee_id = %employee.id, "Employee updated");

        Ok(employee)
    }

    /// Delete an employee and return a confirmation message
    ///
    /// Succeeds whether or not the record existed.
    pub async fn delete(&self, id: &str) -> AppResult<String> {
        self.employees.delete(id).await?;

        tracing::info!(employee_id = %id, "Employee deleted");

        Ok("Employee deleted successfully".to_string())
    }
}
