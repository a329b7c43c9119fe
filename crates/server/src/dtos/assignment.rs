use database::services::assignment::AssignTeachers;
use models::TeacherAssignment;
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// What the assignment form asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    FetchClasses,
    FetchTeachers,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentQuery {
    /// `fetchClasses` or `fetchTeachers`
    pub action: Option<String>,
    /// Required by `fetchTeachers`
    pub department: Option<String>,
}

impl AssignmentQuery {
    /// Unknown actions read as no action
    pub fn action(&self) -> Option<Action> {
        self.action
            .as_deref()
            .and_then(|action| serde_json::from_value(Value::String(action.to_string())).ok())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignTeachersRequest {
    pub class_name: Option<String>,
    #[schema(value_type = Vec<TeacherAssignment>)]
    pub teachers: Option<Value>,
}

impl From<AssignTeachersRequest> for AssignTeachers {
    fn from(request: AssignTeachersRequest) -> Self {
        Self {
            class_name: request.class_name,
            assignments: request
                .teachers
                .and_then(|teachers| serde_json::from_value(teachers).ok()),
        }
    }
}
