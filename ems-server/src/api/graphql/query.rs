//! GraphQL Query Resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use super::types::EmployeeObject;
use crate::core::ServerState;

#[derive(Default)]
pub struct Query;

#[Object(rename_args = "snake_case")]
impl Query {
    /// Authenticate a username/password pair and return a bearer token
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<String> {
        let state = ctx.data_unchecked::<ServerState>();
        state
            .auth_service
            .login(&username, &password)
            .await
            .map_err(|e| e.extend())
    }

    /// List every employee
    async fn get_all_employees(&self, ctx: &Context<'_>) -> Result<Vec<EmployeeObject>> {
        let state = ctx.data_unchecked::<ServerState>();
        let employees = state
            .employee_service
            .get_all()
            .await
            .map_err(|e| e.extend())?;

        Ok(employees.into_iter().map(EmployeeObject::from).collect())
    }

    /// Fetch a single employee by id
    async fn search_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> Result<EmployeeObject> {
        let state = ctx.data_unchecked::<ServerState>();
        let employee = state
            .employee_service
            .get_by_id(&eid)
            .await
            .map_err(|e| e.extend())?;

        Ok(EmployeeObject::from(employee))
    }

    /// Search employees by designation or department
    ///
    /// Supplied filters are combined with OR; with neither filter the
    /// full employee list is returned.
    async fn search_employee_by_designation_or_department(
        &self,
        ctx: &Context<'_>,
        designation: Option<String>,
        department: Option<String>,
    ) -> Result<Vec<EmployeeObject>> {
        let state = ctx.data_unchecked::<ServerState>();
        let employees = state
            .employee_service
            .search(designation, department)
            .await
            .map_err(|e| e.extend())?;

        Ok(employees.into_iter().map(EmployeeObject::from).collect())
    }
}
