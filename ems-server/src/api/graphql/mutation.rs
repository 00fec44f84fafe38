//! GraphQL Mutation Resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use super::types::EmployeeObject;
use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeUpdate, UserCreate};

#[derive(Default)]
pub struct Mutation;

#[Object(rename_args = "snake_case")]
impl Mutation {
    /// Register a new user account
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<String> {
        let state = ctx.data_unchecked::<ServerState>();
        state
            .auth_service
            .signup(UserCreate {
                username,
                email,
                password,
            })
            .await
            .map_err(|e| e.extend())
    }

    /// Create a new employee record
    #[allow(clippy::too_many_arguments)]
    async fn add_employee(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
        gender: String,
        designation: String,
        salary: f64,
        date_of_joining: String,
        department: String,
        employee_photo: Option<String>,
    ) -> Result<EmployeeObject> {
        let state = ctx.data_unchecked::<ServerState>();
        let employee = state
            .employee_service
            .add(EmployeeCreate {
                first_name,
                last_name,
                email,
                gender,
                designation,
                salary,
                date_of_joining,
                department,
                employee_photo,
            })
            .await
            .map_err(|e| e.extend())?;

        Ok(EmployeeObject::from(employee))
    }

    /// Partially update an employee; omitted arguments are left untouched
    #[allow(clippy::too_many_arguments)]
    async fn update_employee_by_eid(
        &self,
        ctx: &Context<'_>,
        eid: ID,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        gender: Option<String>,
        designation: Option<String>,
        salary: Option<f64>,
        date_of_joining: Option<String>,
        department: Option<String>,
        employee_photo: Option<String>,
    ) -> Result<EmployeeObject> {
        let state = ctx.data_unchecked::<ServerState>();
        let employee = state
            .employee_service
            .update(
                &eid,
                EmployeeUpdate {
                    first_name,
                    last_name,
                    email,
                    gender,
                    designation,
                    salary,
                    date_of_joining,
                    department,
                    employee_photo,
                },
            )
            .await
            .map_err(|e| e.extend())?;

        Ok(EmployeeObject::from(employee))
    }

    /// Delete an employee and return a confirmation message
    ///
    /// Deleting an id that does not resolve to a stored employee still
    /// succeeds with the same message.
    async fn delete_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> Result<String> {
        let state = ctx.data_unchecked::<ServerState>();
        state
            .employee_service
            .delete(&eid)
            .await
            .map_err(|e| e.extend())
    }
}
