//! Request and response models for staffctl-server

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ============================================================================
// Employees
// ============================================================================

/// An employee record. Read-only from this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub gender: String,
}

// ============================================================================
// Employee jobs
// ============================================================================

/// A department/title assignment linked to one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct EmployeeJob {
    pub id: i64,
    pub employee_id: i64,
    pub department: String,
    pub job_title: String,
}

/// Body of add/update job requests.
///
/// Decoding is lenient, field by field in document order:
/// - keys match `department` / `job_title` ignoring ASCII case
/// - a later matching key overwrites an earlier one
/// - `null` values and unknown keys are skipped
/// - missing fields stay empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPayload {
    pub department: String,
    pub job_title: String,
}

impl<'de> Deserialize<'de> for JobPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(JobPayloadVisitor)
    }
}

struct JobPayloadVisitor;

impl<'de> Visitor<'de> for JobPayloadVisitor {
    type Value = JobPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with department and job_title strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut payload = JobPayload::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("department") {
                &mut payload.department
            } else if key.eq_ignore_ascii_case("job_title") {
                &mut payload.job_title
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(payload)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(JobPayload::default())
    }
}

/// Response for a successfully added job
#[derive(Debug, Clone, Serialize)]
pub struct JobAdded {
    pub message: &'static str,
    pub id: i64,
}

impl JobAdded {
    pub const MESSAGE: &'static str = "employee job added successfully";

    pub fn new(id: i64) -> Self {
        Self {
            message: Self::MESSAGE,
            id,
        }
    }
}

/// Uniform error envelope: `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_missing_fields_default_to_empty() {
        let payload: JobPayload = serde_json::from_str(r#"{"department":"Eng"}"#).unwrap();
        assert_eq!(payload.department, "Eng");
        assert_eq!(payload.job_title, "");
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload: JobPayload =
            serde_json::from_str(r#"{"job_title":"SWE","salary":100}"#).unwrap();
        assert_eq!(payload.job_title, "SWE");
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_str::<JobPayload>(r#"{"department":7}"#).is_err());
    }

    #[test]
    fn payload_matches_field_names_ignoring_case() {
        let payload: JobPayload =
            serde_json::from_str(r#"{"Department":"Eng","JOB_TITLE":"SWE"}"#).unwrap();
        assert_eq!(payload.department, "Eng");
        assert_eq!(payload.job_title, "SWE");
    }

    #[test]
    fn payload_last_duplicate_key_wins() {
        let payload: JobPayload =
            serde_json::from_str(r#"{"department":"a","job_title":"x","Department":"b"}"#)
                .unwrap();
        assert_eq!(payload.department, "b");
        assert_eq!(payload.job_title, "x");
    }

    #[test]
    fn payload_null_field_keeps_earlier_value() {
        let payload: JobPayload =
            serde_json::from_str(r#"{"department":"Eng","department":null}"#).unwrap();
        assert_eq!(payload.department, "Eng");
    }

    #[test]
    fn payload_rejects_non_objects() {
        assert!(serde_json::from_str::<JobPayload>(r#"["Eng","SWE"]"#).is_err());
        assert!(serde_json::from_str::<JobPayload>(r#""Eng""#).is_err());
    }

    #[test]
    fn job_serializes_with_snake_case_fields() {
        let job = EmployeeJob {
            id: 3,
            employee_id: 9,
            department: "Eng".into(),
            job_title: "SWE".into(),
        };
        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({"id": 3, "employee_id": 9, "department": "Eng", "job_title": "SWE"})
        );
    }

    #[test]
    fn job_added_message() {
        let body = serde_json::to_value(JobAdded::new(12)).unwrap();
        assert_eq!(
            body,
            json!({"message": "employee job added successfully", "id": 12})
        );
    }
}
