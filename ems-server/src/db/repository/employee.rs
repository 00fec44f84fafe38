//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse an id of the form "employee:key"
    ///
    /// Ids that do not parse, or that address another table, cannot name a
    /// stored employee and therefore read as absent.
    fn record_id(id: &str) -> Option<RecordId> {
        let thing: RecordId = id.parse().ok()?;
        (thing.table() == TABLE).then_some(thing)
    }

    /// Find all employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY last_name, first_name")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let Some(thing) = Self::record_id(id) else {
            return Ok(None);
        };
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Find employees matching designation or department
    ///
    /// Filters combine with OR; an absent filter contributes nothing, and
    /// with both absent every employee matches.
    pub async fn find_by_designation_or_department(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> RepoResult<Vec<Employee>> {
        let mut result = match (designation, department) {
            (Some(designation), Some(department)) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM employee \
                         WHERE designation = $designation OR department = $department \
                         ORDER BY last_name, first_name",
                    )
                    .bind(("designation", designation))
                    .bind(("department", department))
                    .await?
            }
            (Some(designation), None) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM employee WHERE designation = $designation \
                         ORDER BY last_name, first_name",
                    )
                    .bind(("designation", designation))
                    .await?
            }
            (None, Some(department)) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM employee WHERE department = $department \
                         ORDER BY last_name, first_name",
                    )
                    .bind(("department", department))
                    .await?
            }
            (None, None) => {
                self.base
                    .db()
                    .query("SELECT * FROM employee ORDER BY last_name, first_name")
                    .await?
            }
        };
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let created: Option<Employee> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee, merging only the supplied fields
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let Some(thing) = Self::record_id(id) else {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    ///
    /// Succeeds whether or not the record existed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let Some(thing) = Self::record_id(id) else {
            return Ok(true);
        };
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
