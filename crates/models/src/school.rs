//! Documents exchanged between the school API and its clients.
//!
//! Field names follow the camelCase wire format of the API, and document
//! identifiers are serialized as `_id`.

use crate::catalog::{ClassLevel, Department, Stream};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A course of a class and the teacher assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeacherAssignment {
    pub course: String,
    /// Teacher's full name at the time of assignment
    pub teacher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
}

/// A class without its student roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassOverview {
    #[serde(rename = "_id")]
    pub id: String,
    pub class_level: ClassLevel,
    pub class_name: String,
    pub stream: Stream,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub teachers: Vec<TeacherAssignment>,
}

/// A complete class document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub class_level: ClassLevel,
    pub class_name: String,
    pub stream: Stream,
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub teachers: Vec<TeacherAssignment>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A teacher as listed for assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeacherOverview {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Department,
}

impl TeacherOverview {
    /// Name stored on assignment records
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Builds the assignment record of this teacher for a course
    pub fn assignment_for(&self, course: &str) -> TeacherAssignment {
        TeacherAssignment {
            course: course.to_owned(),
            teacher: self.full_name(),
            teacher_id: Some(self.id.clone()),
        }
    }
}

/// Body of an assignment submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AssignmentSubmission {
    pub class_name: String,
    pub teachers: Vec<TeacherAssignment>,
}

/// Reply to a successful assignment submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AssignmentReceipt {
    pub success: bool,
    pub message: String,
    pub updated_class: ClassDocument,
}

/// Error body returned by the API. Class endpoints fill `message`,
/// assignment endpoints fill `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The human-readable reason, whichever key carried it
    pub fn reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
