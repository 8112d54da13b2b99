use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable employee identifier. Serialized as a bare integer, and as a string
/// when used as a JSON object key.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

/// Everything the caller supplies for an employee. The id is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "name": "Dana Scully",
        "role": "IT",
        "email": "d@x.com",
        "contact": "555",
        "address": "1 Main St",
        "joiningDate": "2024-01-15",
        "leaves": 0
    })
)]
pub struct EmployeeData {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub email: String,
    pub contact: String,
    #[serde(default)]
    pub address: String,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub joining_date: NaiveDate,

    /// Entitled leave days.
    #[serde(default)]
    pub leaves: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[schema(value_type = u64, example = 1)]
    pub id: EmployeeId,

    #[serde(flatten)]
    pub data: EmployeeData,
}

impl Employee {
    pub fn new(id: EmployeeId, data: EmployeeData) -> Self {
        Self { id, data }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn role(&self) -> &str {
        &self.data.role
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_serializes_flat_with_camel_case_fields() {
        let emp = Employee::new(EmployeeId(7), fixtures::data("Alice Johnson", "Support"));
        let value = serde_json::to_value(&emp).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Alice Johnson");
        assert_eq!(value["joiningDate"], "2023-01-15");
        assert!(value.get("salary").is_none());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let data: EmployeeData = serde_json::from_value(serde_json::json!({
            "name": "Dana",
            "email": "d@x.com",
            "contact": "555",
            "joiningDate": "2024-02-01"
        }))
        .unwrap();

        assert_eq!(data.leaves, 0);
        assert_eq!(data.role, "");
        assert_eq!(data.gender, None);
    }
}
