//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record matching SurrealDB schema
///
/// `date_of_joining` is a pass-through string; the store does not parse
/// or validate the date format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(with = "serde_helpers::record_id")]
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
}

/// Update employee payload
///
/// Every field is independently optional; absent fields are left
/// untouched by the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_skips_absent_fields() {
        let update = EmployeeUpdate {
            salary: Some(5000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(json["salary"], 5000.0);
    }

    #[test]
    fn test_employee_reads_without_photo() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": "employee:abc",
            "first_name": "Ana",
            "last_name": "Lee",
            "email": "a@x.com",
            "gender": "F",
            "designation": "Engineer",
            "salary": 90000.0,
            "date_of_joining": "2023-01-01",
            "department": "R&D"
        }))
        .unwrap();
        assert_eq!(employee.employee_photo, None);
        assert_eq!(employee.id.to_string(), "employee:abc");
    }
}
