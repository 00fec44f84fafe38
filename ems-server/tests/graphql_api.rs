//! GraphQL wire contract tests: operation names, field casing, error codes
//! Run: cargo test -p ems-server --test graphql_api

use ems_server::api::graphql::{AppSchema, build_schema};
use ems_server::{Config, ServerState};

async fn setup() -> (tempfile::TempDir, ServerState, AppSchema) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    let schema = build_schema(state.clone());
    (tmp, state, schema)
}

async fn execute(schema: &AppSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{}: {:?}", query, response.errors);
    serde_json::to_value(&response).unwrap()["data"].clone()
}

const ADD_ANA: &str = r#"mutation {
    addEmployee(first_name: "Ana", last_name: "Lee", email: "ana@example.com",
                gender: "F", designation: "Engineer", salary: 90000.0,
                date_of_joining: "2023-01-01", department: "R&D") {
        id first_name last_name email gender designation salary
        date_of_joining department employee_photo
    }
}"#;

#[tokio::test]
async fn add_employee_and_list_roundtrip() {
    let (_tmp, _state, schema) = setup().await;

    let data = execute(&schema, ADD_ANA).await;
    let added = &data["addEmployee"];
    assert_eq!(added["first_name"], "Ana");
    assert_eq!(added["last_name"], "Lee");
    assert_eq!(added["salary"], 90000.0);
    assert_eq!(added["date_of_joining"], "2023-01-01");
    assert_eq!(added["employee_photo"], serde_json::Value::Null);
    let id = added["id"].as_str().unwrap();
    assert!(id.starts_with("employee:"), "got id {}", id);

    let data = execute(&schema, "{ getAllEmployees { id first_name department } }").await;
    let all = data["getAllEmployees"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], id);
    assert_eq!(all[0]["department"], "R&D");
}

#[tokio::test]
async fn search_employee_by_eid_roundtrip() {
    let (_tmp, _state, schema) = setup().await;

    let data = execute(&schema, ADD_ANA).await;
    let id = data["addEmployee"]["id"].as_str().unwrap().to_string();

    let query = format!(
        r#"{{ searchEmployeeByEid(eid: "{}") {{ id first_name designation }} }}"#,
        id
    );
    let data = execute(&schema, &query).await;
    assert_eq!(data["searchEmployeeByEid"]["id"], id.as_str());
    assert_eq!(data["searchEmployeeByEid"]["first_name"], "Ana");
}

#[tokio::test]
async fn missing_employee_surfaces_not_found_error() {
    let (_tmp, _state, schema) = setup().await;

    let response = schema
        .execute(r#"{ searchEmployeeByEid(eid: "employee:missing") { id } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["errors"][0]["message"],
        "Employee employee:missing not found"
    );
    assert_eq!(json["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn update_employee_by_eid_changes_only_supplied_fields() {
    let (_tmp, _state, schema) = setup().await;

    let data = execute(&schema, ADD_ANA).await;
    let id = data["addEmployee"]["id"].as_str().unwrap().to_string();

    let mutation = format!(
        r#"mutation {{ updateEmployeeByEid(eid: "{}", salary: 120000.0) {{ first_name salary department }} }}"#,
        id
    );
    let data = execute(&schema, &mutation).await;
    let updated = &data["updateEmployeeByEid"];
    assert_eq!(updated["salary"], 120000.0);
    assert_eq!(updated["first_name"], "Ana");
    assert_eq!(updated["department"], "R&D");
}

#[tokio::test]
async fn delete_employee_by_eid_is_idempotent() {
    let (_tmp, _state, schema) = setup().await;

    let data = execute(&schema, ADD_ANA).await;
    let id = data["addEmployee"]["id"].as_str().unwrap().to_string();

    let mutation = format!(r#"mutation {{ deleteEmployeeByEid(eid: "{}") }}"#, id);
    let data = execute(&schema, &mutation).await;
    assert_eq!(data["deleteEmployeeByEid"], "Employee deleted successfully");

    // Second delete of the same id reports the same success
    let data = execute(&schema, &mutation).await;
    assert_eq!(data["deleteEmployeeByEid"], "Employee deleted successfully");

    let response = schema
        .execute(format!(r#"{{ searchEmployeeByEid(eid: "{}") {{ id }} }}"#, id))
        .await;
    assert_eq!(response.errors.len(), 1);
}

#[tokio::test]
async fn search_by_designation_or_department_over_graphql() {
    let (_tmp, _state, schema) = setup().await;

    execute(&schema, ADD_ANA).await;
    execute(
        &schema,
        r#"mutation {
            addEmployee(first_name: "Maria", last_name: "Sanchez", email: "maria@example.com",
                        gender: "F", designation: "Manager", salary: 110000.0,
                        date_of_joining: "2020-06-15", department: "Sales") { id }
        }"#,
    )
    .await;

    let data = execute(
        &schema,
        r#"{ searchEmployeeByDesignationOrDepartment(designation: "Manager") { first_name } }"#,
    )
    .await;
    let hits = data["searchEmployeeByDesignationOrDepartment"]
        .as_array()
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["first_name"], "Maria");

    let data = execute(
        &schema,
        r#"{ searchEmployeeByDesignationOrDepartment(designation: "Manager", department: "R&D") { first_name } }"#,
    )
    .await;
    assert_eq!(
        data["searchEmployeeByDesignationOrDepartment"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn signup_and_login_over_graphql() {
    let (_tmp, state, schema) = setup().await;

    let data = execute(
        &schema,
        r#"mutation { signup(username: "john_doe", email: "john@example.com", password: "secret-password") }"#,
    )
    .await;
    assert_eq!(data["signup"], "User registered successfully");

    let data = execute(
        &schema,
        r#"{ login(username: "john_doe", password: "secret-password") }"#,
    )
    .await;
    let token = data["login"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3, "expected a JWT, got {}", token);

    // The token the API hands out verifies against the running service
    let user = state.auth_service.verify_token(token).unwrap();
    assert_eq!(user.username, "john_doe");
}

#[tokio::test]
async fn login_failures_carry_distinct_error_codes() {
    let (_tmp, _state, schema) = setup().await;

    execute(
        &schema,
        r#"mutation { signup(username: "john_doe", email: "john@example.com", password: "secret-password") }"#,
    )
    .await;

    let response = schema
        .execute(r#"{ login(username: "nobody", password: "whatever") }"#)
        .await;
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["errors"][0]["message"], "User not found");
    assert_eq!(json["errors"][0]["extensions"]["code"], "NOT_FOUND");

    let response = schema
        .execute(r#"{ login(username: "john_doe", password: "wrong") }"#)
        .await;
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["errors"][0]["message"], "Invalid credentials");
    assert_eq!(
        json["errors"][0]["extensions"]["code"],
        "INVALID_CREDENTIALS"
    );
}

#[tokio::test]
async fn duplicate_signup_surfaces_duplicate_code() {
    let (_tmp, _state, schema) = setup().await;

    let signup = r#"mutation { signup(username: "john_doe", email: "john@example.com", password: "secret-password") }"#;
    execute(&schema, signup).await;

    let response = schema.execute(signup).await;
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["errors"][0]["extensions"]["code"],
        "DUPLICATE_IDENTITY"
    );
}

#[tokio::test]
async fn schema_exposes_snake_case_employee_fields() {
    let (_tmp, _state, schema) = setup().await;

    let data = execute(
        &schema,
        r#"{ __type(name: "Employee") { fields { name } } }"#,
    )
    .await;
    let fields: Vec<&str> = data["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        fields,
        vec![
            "id",
            "first_name",
            "last_name",
            "email",
            "gender",
            "designation",
            "salary",
            "date_of_joining",
            "department",
            "employee_photo",
        ]
    );
}
