use chrono::Utc;
use models::{ClassDocument, ClassLevel, Stream, TeacherAssignment, format::is_roll_number};
use sea_orm::{FromJsonQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Roll numbers of the students enrolled in a class, in enrollment order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RollNumbers(pub Vec<String>);

/// Names of the courses taught to a class
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CourseList(pub Vec<String>);

/// Course to teacher assignments of a class
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AssignmentList(pub Vec<TeacherAssignment>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_level: ClassLevel,
    #[sea_orm(unique)]
    pub class_name: String,
    pub stream: Stream,
    pub students: RollNumbers,
    pub courses: CourseList,
    pub teachers: AssignmentList,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(class_name) = self.class_name.try_as_ref()
            && class_name.trim().is_empty()
        {
            return Err(DbErr::Custom("Class name must not be empty".to_string()));
        }

        if let Some(RollNumbers(students)) = self.students.try_as_ref()
            && let Some(invalid) = students.iter().find(|roll_no| !is_roll_number(roll_no))
        {
            return Err(DbErr::Custom(format!(
                "Invalid roll number format: {invalid}"
            )));
        }

        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(Utc::now().naive_utc());
        }

        Ok(self)
    }
}

impl From<Model> for ClassDocument {
    fn from(class: Model) -> Self {
        Self {
            id: class.id.to_string(),
            class_level: class.class_level,
            class_name: class.class_name,
            stream: class.stream,
            students: class.students.0,
            courses: class.courses.0,
            teachers: class.teachers.0,
            created_at: class.created_at,
            updated_at: class.updated_at,
        }
    }
}
