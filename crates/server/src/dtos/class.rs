use database::services::class::{NewClass, RosterEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RosterQuery {
    /// Numeric class level, e.g. `9`
    pub class_level: Option<String>,
    /// Required for classes 9 and 10
    pub stream: Option<String>,
}

/// A student on a class roster
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub class_level: i32,
    pub class_type: String,
    pub roll_no: String,
}

impl From<RosterEntry> for RosterStudent {
    fn from(entry: RosterEntry) -> Self {
        Self {
            first_name: entry.first_name,
            last_name: entry.last_name,
            email: entry.email,
            contact_number: entry.contact_number,
            profile_picture: entry.profile_picture,
            class_level: entry.class_level,
            class_type: entry.class_type,
            roll_no: entry.roll_no,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClassRequest {
    /// Class label, e.g. `Class 10`
    pub class_level: Option<String>,
    pub class_name: Option<String>,
    pub stream: Option<String>,
    /// Roll numbers of existing students
    #[schema(value_type = Vec<String>)]
    pub students: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub courses: Option<Value>,
}

impl From<CreateClassRequest> for NewClass {
    fn from(request: CreateClassRequest) -> Self {
        Self {
            class_level: request.class_level,
            class_name: request.class_name,
            stream: request.stream,
            students: request.students.and_then(string_list),
            // An omitted course list is empty
            courses: match request.courses {
                None => Some(Vec::new()),
                Some(courses) => string_list(courses),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassResponse {
    pub message: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub students: Vec<String>,
}

fn string_list(value: Value) -> Option<Vec<String>> {
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> NewClass {
        serde_json::from_value::<CreateClassRequest>(body)
            .unwrap()
            .into()
    }

    #[test]
    fn test_students_must_be_a_list_of_strings() {
        assert_eq!(
            request(json!({"students": ["100000001"]})).students,
            Some(vec!["100000001".to_string()])
        );
        assert_eq!(request(json!({"students": "100000001"})).students, None);
        assert_eq!(request(json!({"students": [100000001]})).students, None);
        assert_eq!(request(json!({})).students, None);
    }

    #[test]
    fn test_courses_default_to_empty() {
        assert_eq!(request(json!({})).courses, Some(Vec::new()));
        assert_eq!(request(json!({"courses": null})).courses, Some(Vec::new()));
        assert_eq!(request(json!({"courses": {"name": "Maths"}})).courses, None);
    }
}
