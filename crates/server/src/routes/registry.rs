use crate::{
    dtos::registry::{
        ParentRecord, ParentRegistration, StudentRecord, StudentRegistration, TeacherRecord,
        TeacherRegistration,
    },
    error::{ApiError, ErrorKey},
    state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use database::{db::with_connection, services::registry::RegistryService};
use models::ErrorBody;

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentRegistration,
    responses(
        (status = 201, description = "Student registered", body = StudentRecord),
        (status = 400, description = "Invalid record or duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Registry"
)]
pub async fn register_student(
    State(state): State<AppState>,
    body: Result<Json<StudentRegistration>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentRecord>), ApiError> {
    let Json(registration) = body.map_err(|e| ApiError::rejected(ErrorKey::Message, e))?;

    let student = with_connection(&state.database_url, |db| async move {
        RegistryService::register_student(&db, registration.into()).await
    })
    .await
    .map_err(ApiError::class)?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Register a teacher
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = TeacherRegistration,
    responses(
        (status = 201, description = "Teacher registered", body = TeacherRecord),
        (status = 400, description = "Invalid record, duplicate CNIC or email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Registry"
)]
pub async fn register_teacher(
    State(state): State<AppState>,
    body: Result<Json<TeacherRegistration>, JsonRejection>,
) -> Result<(StatusCode, Json<TeacherRecord>), ApiError> {
    let Json(registration) = body.map_err(|e| ApiError::rejected(ErrorKey::Message, e))?;

    let teacher = with_connection(&state.database_url, |db| async move {
        RegistryService::register_teacher(&db, registration.into()).await
    })
    .await
    .map_err(ApiError::class)?;

    Ok((StatusCode::CREATED, Json(teacher.into())))
}

/// Register a parent
#[utoipa::path(
    post,
    path = "/parents",
    request_body = ParentRegistration,
    responses(
        (status = 201, description = "Parent registered", body = ParentRecord),
        (status = 400, description = "Invalid record, duplicate CNIC or email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Registry"
)]
pub async fn register_parent(
    State(state): State<AppState>,
    body: Result<Json<ParentRegistration>, JsonRejection>,
) -> Result<(StatusCode, Json<ParentRecord>), ApiError> {
    let Json(registration) = body.map_err(|e| ApiError::rejected(ErrorKey::Message, e))?;

    let parent = with_connection(&state.database_url, |db| async move {
        RegistryService::register_parent(&db, registration.into()).await
    })
    .await
    .map_err(ApiError::class)?;

    Ok((StatusCode::CREATED, Json(parent.into())))
}
