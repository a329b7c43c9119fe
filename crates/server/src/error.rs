use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::ServiceError;
use log::{error, warn};
use models::ErrorBody;

/// Key an endpoint reports its failure reason under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKey {
    /// Class and registry endpoints
    Message,
    /// Teacher assignment endpoints
    Error,
}

/// A failed request, rendered as a JSON error body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    key: ErrorKey,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, key: ErrorKey, message: impl Into<String>) -> Self {
        Self {
            status,
            key,
            message: message.into(),
        }
    }

    pub fn bad_request(key: ErrorKey, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, key, message)
    }

    /// Failure of a class or registry endpoint. Database failures expose
    /// their detail to the caller.
    pub fn class(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(e) => {
                error!("Database error: {e}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKey::Message,
                    format!("Server error: {e}"),
                )
            }
            other => Self::new(status_of(&other), ErrorKey::Message, other.to_string()),
        }
    }

    /// Failure of a teacher assignment endpoint. Database failures are
    /// reported generically.
    pub fn assignment(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(e) => {
                error!("Database error: {e}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKey::Error,
                    "Internal Server Error",
                )
            }
            other => Self::new(status_of(&other), ErrorKey::Error, other.to_string()),
        }
    }

    /// A body that could not be read as the expected JSON
    pub fn rejected(key: ErrorKey, rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {rejection}");
        Self::bad_request(key, rejection.body_text())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn status_of(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.key {
            ErrorKey::Message => ErrorBody {
                message: Some(self.message),
                error: None,
            },
            ErrorKey::Error => ErrorBody {
                message: None,
                error: Some(self.message),
            },
        };

        (self.status, Json(body)).into_response()
    }
}
