use crate::{
    entities::{parents, students, teachers},
    error::ServiceError,
};
use log::info;
use models::Department;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use std::str::FromStr;
use uuid::Uuid;

/// Fields shared by every person record
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Credential digest produced by the authentication service
    pub password: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub identity: Identity,
    pub class_level: i32,
    pub class_type: String,
    pub roll_no: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewTeacher {
    pub identity: Identity,
    pub cnic: String,
    pub department: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewParent {
    pub identity: Identity,
    pub cnic: String,
}

pub struct RegistryService;

impl RegistryService {
    pub async fn register_student(
        db: &DatabaseConnection,
        student: NewStudent,
    ) -> Result<students::Model, ServiceError> {
        let identity = required_identity(student.identity)?;

        let model = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(identity.first_name),
            last_name: Set(identity.last_name),
            email: Set(identity.email),
            password: Set(identity.password),
            contact_number: Set(identity.contact_number),
            profile_picture: Set(identity.profile_picture),
            class_level: Set(student.class_level),
            class_type: Set(student.class_type),
            roll_no: Set(student.roll_no),
        }
        .insert(db)
        .await
        .map_err(|e| duplicate_identity(e.into()))?;

        info!("Registered student {} ({})", model.roll_no, model.email);
        Ok(model)
    }

    pub async fn register_teacher(
        db: &DatabaseConnection,
        teacher: NewTeacher,
    ) -> Result<teachers::Model, ServiceError> {
        let identity = required_identity(teacher.identity)?;
        let department = Department::from_str(&teacher.department).map_err(|_| {
            ServiceError::validation(format!(
                "`{}` is not a valid department",
                teacher.department
            ))
        })?;

        let model = teachers::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(identity.first_name),
            last_name: Set(identity.last_name),
            email: Set(identity.email),
            password: Set(identity.password),
            contact_number: Set(identity.contact_number),
            profile_picture: Set(identity.profile_picture),
            cnic: Set(teacher.cnic),
            department: Set(department),
        }
        .insert(db)
        .await
        .map_err(|e| duplicate_identity(e.into()))?;

        info!("Registered {} teacher {}", model.department, model.email);
        Ok(model)
    }

    pub async fn register_parent(
        db: &DatabaseConnection,
        parent: NewParent,
    ) -> Result<parents::Model, ServiceError> {
        let identity = required_identity(parent.identity)?;

        let model = parents::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(identity.first_name),
            last_name: Set(identity.last_name),
            email: Set(identity.email),
            password: Set(identity.password),
            contact_number: Set(identity.contact_number),
            profile_picture: Set(identity.profile_picture),
            cnic: Set(parent.cnic),
        }
        .insert(db)
        .await
        .map_err(|e| duplicate_identity(e.into()))?;

        info!("Registered parent {}", model.email);
        Ok(model)
    }
}

fn required_identity(identity: Identity) -> Result<Identity, ServiceError> {
    let missing = [
        ("firstName", &identity.first_name),
        ("lastName", &identity.last_name),
        ("email", &identity.email),
        ("password", &identity.password),
        ("contactNumber", &identity.contact_number),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field);

    match missing {
        Some(field) => Err(ServiceError::validation(format!("`{field}` is required"))),
        None => Ok(identity),
    }
}

/// Names the unique field behind a conflict reported by the store
fn duplicate_identity(err: ServiceError) -> ServiceError {
    match err {
        ServiceError::Conflict(detail) if detail.contains("cnic") => {
            ServiceError::conflict("CNIC is already registered")
        }
        ServiceError::Conflict(detail) if detail.contains("email") => {
            ServiceError::conflict("Email is already registered")
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_identity_names_missing_field() {
        let identity = Identity {
            first_name: "Sana".to_string(),
            last_name: "Iqbal".to_string(),
            email: "sana@example.com".to_string(),
            password: String::new(),
            contact_number: "03001234567".to_string(),
            profile_picture: None,
        };

        let err = required_identity(identity).unwrap_err();
        assert_eq!(err.to_string(), "`password` is required");
    }

    #[test]
    fn test_duplicate_identity_messages() {
        let err = duplicate_identity(ServiceError::conflict(
            "UNIQUE constraint failed: teachers.cnic",
        ));
        assert_eq!(err.to_string(), "CNIC is already registered");

        let err = duplicate_identity(ServiceError::conflict(
            "duplicate key value violates unique constraint \"idx_parents_email\"",
        ));
        assert_eq!(err.to_string(), "Email is already registered");
    }
}
