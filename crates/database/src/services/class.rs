use crate::{
    entities::{
        classes::{self, AssignmentList, CourseList, RollNumbers},
        students,
    },
    error::ServiceError,
};
use chrono::Utc;
use log::{debug, info};
use models::{
    ClassLevel, ClassOverview, Stream,
    catalog::{is_upper_class_label, is_upper_class_level},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::str::FromStr;
use uuid::Uuid;

const CLASS_NAME_TAKEN: &str = "Class name already exists";

/// Class type of every student below the senior grades
pub const GENERAL_CLASS_TYPE: &str = "General";

/// A class without its student roll
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ClassSummary {
    pub id: Uuid,
    pub class_level: ClassLevel,
    pub class_name: String,
    pub stream: Stream,
    pub courses: CourseList,
    pub teachers: AssignmentList,
}

impl From<ClassSummary> for ClassOverview {
    fn from(class: ClassSummary) -> Self {
        Self {
            id: class.id.to_string(),
            class_level: class.class_level,
            class_name: class.class_name,
            stream: class.stream,
            courses: class.courses.0,
            teachers: class.teachers.0,
        }
    }
}

/// A student as listed on a class roster, without credentials or identifier
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RosterEntry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub class_level: i32,
    pub class_type: String,
    pub roll_no: String,
}

/// Class creation request as received from a client.
///
/// `students` and `courses` are `None` when the client sent something other
/// than a list of strings.
#[derive(Debug, Clone, Default)]
pub struct NewClass {
    pub class_level: Option<String>,
    pub class_name: Option<String>,
    pub stream: Option<String>,
    pub students: Option<Vec<String>>,
    pub courses: Option<Vec<String>>,
}

/// Outcome of a successful class creation
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedClass {
    pub id: Uuid,
    pub class_name: String,
    pub students: Vec<String>,
}

pub struct ClassService;

impl ClassService {
    /// List every class, leaving out the student rolls
    pub async fn list_classes(db: &DatabaseConnection) -> Result<Vec<ClassSummary>, DbErr> {
        classes::Entity::find()
            .select_only()
            .columns([
                classes::Column::Id,
                classes::Column::ClassLevel,
                classes::Column::ClassName,
                classes::Column::Stream,
                classes::Column::Courses,
                classes::Column::Teachers,
            ])
            .order_by_asc(classes::Column::CreatedAt)
            .into_model::<ClassSummary>()
            .all(db)
            .await
    }

    /// List the students of a class level, and of a stream for the senior grades
    pub async fn list_students(
        db: &DatabaseConnection,
        class_level: Option<&str>,
        stream: Option<&str>,
    ) -> Result<Vec<RosterEntry>, ServiceError> {
        let (class_level, class_type) = roster_filter(class_level, stream)?;
        debug!("Listing students of class level {class_level} ({class_type})");

        let roster = students::Entity::find()
            .select_only()
            .columns([
                students::Column::FirstName,
                students::Column::LastName,
                students::Column::Email,
                students::Column::ContactNumber,
                students::Column::ProfilePicture,
                students::Column::ClassLevel,
                students::Column::ClassType,
                students::Column::RollNo,
            ])
            .filter(students::Column::ClassLevel.eq(class_level))
            .filter(students::Column::ClassType.eq(class_type))
            .into_model::<RosterEntry>()
            .all(db)
            .await?;

        Ok(roster)
    }

    /// Create a class from existing students.
    ///
    /// The class name check and the insert are separate statements, so two
    /// concurrent creations of the same name can both pass the check; the
    /// unique index then reports the loser as a conflict.
    pub async fn create_class(
        db: &DatabaseConnection,
        new_class: NewClass,
    ) -> Result<CreatedClass, ServiceError> {
        let (Some(raw_level), Some(class_name)) = (
            non_empty(new_class.class_level),
            non_empty(new_class.class_name),
        ) else {
            return Err(ServiceError::validation("Class level and name are required"));
        };

        let Some(roll_numbers) = new_class.students else {
            return Err(ServiceError::validation("Invalid students format"));
        };

        let Some(courses) = new_class.courses else {
            return Err(ServiceError::validation("Invalid courses format"));
        };

        // Repeated roll numbers are counted once by the store, so they fail here too
        let existing = students::Entity::find()
            .filter(students::Column::RollNo.is_in(roll_numbers.iter().cloned()))
            .count(db)
            .await?;

        if existing != roll_numbers.len() as u64 {
            return Err(ServiceError::validation("One or more students don't exist"));
        }

        let duplicate = classes::Entity::find()
            .filter(classes::Column::ClassName.eq(class_name.as_str()))
            .one(db)
            .await?;

        if duplicate.is_some() {
            return Err(ServiceError::conflict(CLASS_NAME_TAKEN));
        }

        let class_level = ClassLevel::from_str(&raw_level).map_err(|_| {
            ServiceError::validation(format!("`{raw_level}` is not a valid class level"))
        })?;
        let stream = class_stream(&raw_level, new_class.stream.as_deref())?;

        let now = Utc::now().naive_utc();
        let class = classes::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_level: Set(class_level),
            class_name: Set(class_name),
            stream: Set(stream),
            students: Set(RollNumbers(roll_numbers)),
            courses: Set(CourseList(courses)),
            teachers: Set(AssignmentList::default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(CLASS_NAME_TAKEN))?;

        info!(
            "Created class {} ({}, {}) with {} students",
            class.class_name,
            class.class_level,
            class.stream,
            class.students.0.len()
        );

        Ok(CreatedClass {
            id: class.id,
            class_name: class.class_name,
            students: class.students.0,
        })
    }
}

/// Resolves the `(classLevel, classType)` pair a roster lookup filters on
pub fn roster_filter(
    class_level: Option<&str>,
    stream: Option<&str>,
) -> Result<(i32, String), ServiceError> {
    let class_level = class_level
        .and_then(parse_class_level)
        .ok_or_else(|| ServiceError::validation("Valid class level parameter required"))?;

    if !is_upper_class_level(class_level) {
        return Ok((class_level, GENERAL_CLASS_TYPE.to_string()));
    }

    let stream = stream
        .and_then(Stream::parse_elective)
        .ok_or_else(|| ServiceError::validation("Valid stream required for classes 9-10"))?;

    Ok((class_level, stream.to_string()))
}

/// Stream stored on a new class. Only the literal `Class 9` and `Class 10`
/// labels keep the requested stream; every other level is General.
fn class_stream(raw_level: &str, requested: Option<&str>) -> Result<Stream, ServiceError> {
    if !is_upper_class_label(raw_level) {
        return Ok(Stream::General);
    }

    match requested.filter(|s| !s.is_empty()) {
        Some(name) => Stream::from_str(name)
            .map_err(|_| ServiceError::validation(format!("`{name}` is not a valid stream"))),
        None => Ok(Stream::default()),
    }
}

/// Parses a class level. The whole value must be numeric (decimal, exponent or
/// `0x`/`0o`/`0b` literal), but only its leading integer is used, so `9.7` and
/// `9e1` are both level 9 while `0x9` is level 9 read as hex.
fn parse_class_level(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let numeric = raw.parse::<f64>().is_ok_and(|n| !n.is_nan()) || radix_literal(raw).is_some();
    if !numeric {
        return None;
    }

    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return i32::from_str_radix(hex, 16).ok();
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let level: i32 = digits[..end].parse().ok()?;

    Some(if negative { -level } else { level })
}

fn radix_literal(raw: &str) -> Option<i64> {
    let (radix, digits) = match raw.get(..2)? {
        "0x" | "0X" => (16, &raw[2..]),
        "0o" | "0O" => (8, &raw[2..]),
        "0b" | "0B" => (2, &raw[2..]),
        _ => return None,
    };
    if digits.starts_with(['+', '-']) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
