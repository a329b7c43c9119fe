use database::{
    entities::{parents, students, teachers},
    services::registry::{Identity, NewParent, NewStudent, NewTeacher},
};
use models::Department;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Personal details shared by every registration. Omitted fields read as
/// empty and are reported by name.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digest issued by the authentication service
    pub password: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
}

impl From<IdentityFields> for Identity {
    fn from(fields: IdentityFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            password: fields.password,
            contact_number: fields.contact_number,
            profile_picture: fields.profile_picture,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    #[serde(flatten)]
    pub identity: IdentityFields,
    pub class_level: i32,
    #[serde(default = "general")]
    pub class_type: String,
    #[serde(default)]
    pub roll_no: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRegistration {
    #[serde(flatten)]
    pub identity: IdentityFields,
    #[serde(default)]
    pub cnic: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentRegistration {
    #[serde(flatten)]
    pub identity: IdentityFields,
    #[serde(default)]
    pub cnic: String,
}

fn general() -> String {
    database::services::class::GENERAL_CLASS_TYPE.to_string()
}

impl From<StudentRegistration> for NewStudent {
    fn from(registration: StudentRegistration) -> Self {
        Self {
            identity: registration.identity.into(),
            class_level: registration.class_level,
            class_type: registration.class_type,
            roll_no: registration.roll_no,
        }
    }
}

impl From<TeacherRegistration> for NewTeacher {
    fn from(registration: TeacherRegistration) -> Self {
        Self {
            identity: registration.identity.into(),
            cnic: registration.cnic,
            department: registration.department,
        }
    }
}

impl From<ParentRegistration> for NewParent {
    fn from(registration: ParentRegistration) -> Self {
        Self {
            identity: registration.identity.into(),
            cnic: registration.cnic,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub class_level: i32,
    pub class_type: String,
    pub roll_no: String,
}

impl From<students::Model> for StudentRecord {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            contact_number: student.contact_number,
            profile_picture: student.profile_picture,
            class_level: student.class_level,
            class_type: student.class_type,
            roll_no: student.roll_no,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub cnic: String,
    pub department: Department,
}

impl From<teachers::Model> for TeacherRecord {
    fn from(teacher: teachers::Model) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            email: teacher.email,
            contact_number: teacher.contact_number,
            profile_picture: teacher.profile_picture,
            cnic: teacher.cnic,
            department: teacher.department,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub cnic: String,
}

impl From<parents::Model> for ParentRecord {
    fn from(parent: parents::Model) -> Self {
        Self {
            id: parent.id,
            first_name: parent.first_name,
            last_name: parent.last_name,
            email: parent.email,
            contact_number: parent.contact_number,
            profile_picture: parent.profile_picture,
            cnic: parent.cnic,
        }
    }
}
