use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures of the school services, grouped by how a caller should react
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input, or a record that breaks a schema rule
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    /// A record with the same unique key already exists
    #[error("{0}")]
    Conflict(String),

    /// Unexpected database or connectivity failure
    #[error("{0}")]
    Database(DbErr),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Replaces the detail of a conflict with a caller-facing message
    pub(crate) fn with_conflict_message(self, message: &str) -> Self {
        match self {
            Self::Conflict(_) => Self::Conflict(message.to_string()),
            other => other,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return Self::Conflict(detail);
        }

        match err {
            // Raised by the schema checks in `ActiveModelBehavior::before_save`
            DbErr::Custom(message) => Self::Validation(message),
            other => Self::Database(other),
        }
    }
}
