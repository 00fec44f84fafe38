//! GraphQL Wire Types
//!
//! API-facing shapes for the employee domain. Field names are exposed
//! in snake_case to match the published schema.

use async_graphql::{ID, SimpleObject};

use crate::db::models::Employee;

/// Employee as exposed over GraphQL
///
/// The record id is flattened to its `table:key` string form.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Employee", rename_fields = "snake_case")]
pub struct EmployeeObject {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    pub employee_photo: Option<String>,
}

impl From<Employee> for EmployeeObject {
    fn from(employee: Employee) -> Self {
        Self {
            id: ID(employee.id.to_string()),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            gender: employee.gender,
            designation: employee.designation,
            salary: employee.salary,
            date_of_joining: employee.date_of_joining,
            department: employee.department,
            employee_photo: employee.employee_photo,
        }
    }
}
