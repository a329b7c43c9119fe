use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[cfg(feature = "database")]
use sea_orm::DeriveActiveEnum;

/// Grade label of a class, from `Class 1` up to `Class 10`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text", enum_name = "class_level")
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ClassLevel {
    #[serde(rename = "Class 1")]
    #[strum(serialize = "Class 1")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 1"))]
    One,
    #[serde(rename = "Class 2")]
    #[strum(serialize = "Class 2")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 2"))]
    Two,
    #[serde(rename = "Class 3")]
    #[strum(serialize = "Class 3")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 3"))]
    Three,
    #[serde(rename = "Class 4")]
    #[strum(serialize = "Class 4")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 4"))]
    Four,
    #[serde(rename = "Class 5")]
    #[strum(serialize = "Class 5")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 5"))]
    Five,
    #[serde(rename = "Class 6")]
    #[strum(serialize = "Class 6")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 6"))]
    Six,
    #[serde(rename = "Class 7")]
    #[strum(serialize = "Class 7")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 7"))]
    Seven,
    #[serde(rename = "Class 8")]
    #[strum(serialize = "Class 8")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 8"))]
    Eight,
    #[serde(rename = "Class 9")]
    #[strum(serialize = "Class 9")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 9"))]
    Nine,
    #[serde(rename = "Class 10")]
    #[strum(serialize = "Class 10")]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Class 10"))]
    Ten,
}

/// Labels of the two senior grades that choose an elective stream
pub const UPPER_CLASS_LABELS: [&str; 2] = ["Class 9", "Class 10"];

/// Numeric range of the two senior grades, as used by roster lookups
pub const UPPER_CLASS_LEVELS: std::ops::RangeInclusive<i32> = 9..=10;

impl ClassLevel {
    /// The ordinal grade number (1 through 10)
    pub fn number(self) -> i32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
        }
    }

    pub fn from_number(number: i32) -> Option<Self> {
        Self::iter().find(|level| level.number() == number)
    }

    pub fn all() -> Vec<ClassLevel> {
        ClassLevel::iter().collect()
    }
}

/// Whether a raw class-level label selects a stream on class creation.
///
/// This is keyed on the literal label text, so `"9"` or `"class 9"` do not
/// qualify. Roster lookups use [`is_upper_class_level`] instead, which is
/// keyed on the numeric grade; the two predicates are intentionally separate.
pub fn is_upper_class_label(label: &str) -> bool {
    UPPER_CLASS_LABELS.contains(&label)
}

/// Whether a numeric grade requires a stream on roster lookups
pub fn is_upper_class_level(level: i32) -> bool {
    UPPER_CLASS_LEVELS.contains(&level)
}

/// Elective track of a class
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text", enum_name = "stream")
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Stream {
    #[default]
    #[cfg_attr(feature = "database", sea_orm(string_value = "General"))]
    General,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Arts"))]
    Arts,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Science"))]
    Science,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Computer"))]
    Computer,
}

impl Stream {
    /// Streams a senior student can be enrolled in
    pub const ELECTIVES: [Stream; 3] = [Stream::Arts, Stream::Science, Stream::Computer];

    pub fn is_elective(self) -> bool {
        self != Self::General
    }

    /// Parses an elective stream name, rejecting `General`
    pub fn parse_elective(name: &str) -> Option<Self> {
        Self::from_str(name).ok().filter(|stream| stream.is_elective())
    }

    pub fn all() -> Vec<Stream> {
        Stream::iter().collect()
    }
}

/// Subject area a teacher belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text", enum_name = "department")
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Department {
    #[cfg_attr(feature = "database", sea_orm(string_value = "Arts"))]
    Arts,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Maths"))]
    Maths,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Chem"))]
    Chem,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Physics"))]
    Physics,
    #[cfg_attr(feature = "database", sea_orm(string_value = "English"))]
    English,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Urdu"))]
    Urdu,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Islamiat"))]
    Islamiat,
    #[cfg_attr(feature = "database", sea_orm(string_value = "History"))]
    History,
}

impl Department {
    pub fn all() -> Vec<Department> {
        Department::iter().collect()
    }
}

/// Every enumeration the school uses, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Catalog {
    pub class_levels: Vec<ClassLevel>,
    pub streams: Vec<Stream>,
    pub departments: Vec<Department>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            class_levels: ClassLevel::all(),
            streams: Stream::all(),
            departments: Department::all(),
        }
    }
}
