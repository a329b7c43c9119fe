use crate::{
    entities::{
        classes::{self, AssignmentList},
        teachers,
    },
    error::ServiceError,
    services::class::{ClassService, ClassSummary},
};
use log::info;
use models::{Department, TeacherAssignment, TeacherOverview};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};
use std::str::FromStr;
use uuid::Uuid;

/// A teacher as offered for assignment
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct TeacherSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub department: Department,
}

impl From<TeacherSummary> for TeacherOverview {
    fn from(teacher: TeacherSummary) -> Self {
        Self {
            id: teacher.id.to_string(),
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            department: teacher.department,
        }
    }
}

/// Assignment submission as received from a client.
///
/// `assignments` is `None` when the client did not send a list.
#[derive(Debug, Clone, Default)]
pub struct AssignTeachers {
    pub class_name: Option<String>,
    pub assignments: Option<Vec<TeacherAssignment>>,
}

pub struct AssignmentService;

impl AssignmentService {
    /// Classes offered on the assignment form, with their courses and current assignments
    pub async fn fetch_classes_for_assignment(
        db: &DatabaseConnection,
    ) -> Result<Vec<ClassSummary>, DbErr> {
        ClassService::list_classes(db).await
    }

    /// Teachers of a department.
    ///
    /// A missing or unknown department matches nothing rather than failing.
    pub async fn fetch_teachers_by_department(
        db: &DatabaseConnection,
        department: Option<&str>,
    ) -> Result<Vec<TeacherSummary>, DbErr> {
        let Some(department) = department.and_then(|d| Department::from_str(d).ok()) else {
            return Ok(Vec::new());
        };

        teachers::Entity::find()
            .select_only()
            .columns([
                teachers::Column::Id,
                teachers::Column::FirstName,
                teachers::Column::LastName,
                teachers::Column::Department,
            ])
            .filter(teachers::Column::Department.eq(department))
            .order_by_asc(teachers::Column::LastName)
            .order_by_asc(teachers::Column::FirstName)
            .into_model::<TeacherSummary>()
            .all(db)
            .await
    }

    /// Replace the assignments of a class with the submitted list.
    ///
    /// Previous assignments are dropped, not merged. Courses and teachers are
    /// stored as submitted without checking them against the class or the
    /// teacher records.
    pub async fn assign_teachers(
        db: &DatabaseConnection,
        request: AssignTeachers,
    ) -> Result<classes::Model, ServiceError> {
        let (Some(class_name), Some(assignments)) = (
            request.class_name.filter(|name| !name.is_empty()),
            request.assignments,
        ) else {
            return Err(ServiceError::validation("Invalid input data"));
        };

        let class = classes::Entity::find()
            .filter(classes::Column::ClassName.eq(class_name.as_str()))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Class not found"))?;

        let count = assignments.len();
        let mut class: classes::ActiveModel = class.into();
        class.teachers = Set(AssignmentList(assignments));

        let updated = class.update(db).await.map_err(|e| match e {
            // The class was removed between the lookup and the update
            DbErr::RecordNotUpdated => ServiceError::not_found("Class not found"),
            other => ServiceError::from(other),
        })?;

        info!("Assigned {count} course teachers to class {class_name}");

        Ok(updated)
    }
}
